/// Execution semantics of a call at its destination.
///
/// Packed as a single byte ahead of every entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operation {
    #[default]
    Call = 0x00,
    DelegateCall = 0x01,
}

impl Operation {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Operation {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Operation::*;
        let op = match value {
            0x00 => Call,
            0x01 => DelegateCall,
            _ => return Err(()),
        };
        Ok(op)
    }
}

impl From<Operation> for u8 {
    fn from(op: Operation) -> Self {
        op.as_u8()
    }
}
