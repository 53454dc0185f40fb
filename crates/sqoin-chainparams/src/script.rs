pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_RETURN: u8 = 0x6a;
pub const OP_CHECKSIG: u8 = 0xac;

/// Raw script bytes with just enough builder surface for coinbase
/// construction. Not an interpreter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push_opcode(mut self, op: u8) -> Self {
        self.0.push(op);
        self
    }

    /// Appends `data` behind the shortest push prefix.
    pub fn push_data(mut self, data: &[u8]) -> Self {
        let n = data.len();
        if n < OP_PUSHDATA1 as usize {
            self.0.push(n as u8);
        } else if n <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(n as u8);
        } else if n <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(n as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(n as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Spells an integer the way script programs do: dedicated opcodes for
    /// -1 and 1..=16, `OP_0` for zero, a minimal number push otherwise.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (n as u8) - 1),
            _ => self.push_scriptnum(n),
        }
    }

    /// Forces a data push of the minimal signed little-endian encoding,
    /// bypassing the small-integer opcodes.
    pub fn push_scriptnum(self, n: i64) -> Self {
        let bytes = scriptnum_encode(n);
        self.push_data(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn scriptnum_encode(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::new();
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // Top bit of the last byte carries the sign, so a magnitude that uses
    // it needs one extra byte.
    if out.last().is_some_and(|b| b & 0x80 != 0) {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        let last = out.len() - 1;
        out[last] |= 0x80;
    }
    out
}
