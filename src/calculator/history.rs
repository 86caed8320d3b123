//! Operation history: the append-only log of completed calculations.
//!
//! Every successful operation appends one [`OperationRecord`]. Records
//! are immutable once created and keep insertion order, so the history
//! always reads back in call order. Failed operations never append.

use std::fmt;
use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// Identifier of a history record, assigned in call order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(NonZeroU32);

impl RecordId {
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn value(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six arithmetic operations the calculator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
}

impl OperationKind {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::SquareRoot => "square_root",
        }
    }

    /// Symbol used when rendering expressions ("+", "√", ...).
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::SquareRoot => "√",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operands of one operation. Square root is the only unary operation;
/// everything else is binary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    Unary(f64),
    Binary(f64, f64),
}

// Serialized as a plain sequence ([x] or [a, b]) so JSON consumers see
// one shape regardless of arity.
impl Serialize for Operands {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Unary(x) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(&x)?;
                seq.end()
            }
            Self::Binary(a, b) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(&a)?;
                seq.serialize_element(&b)?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Operands {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OperandsVisitor;

        impl<'de> Visitor<'de> for OperandsVisitor {
            type Value = Operands;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of one or two numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Operands, A::Error> {
                let first: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                match seq.next_element::<f64>()? {
                    None => Ok(Operands::Unary(first)),
                    Some(second) => {
                        if seq.next_element::<f64>()?.is_some() {
                            return Err(de::Error::invalid_length(3, &self));
                        }
                        Ok(Operands::Binary(first, second))
                    }
                }
            }
        }

        deserializer.deserialize_seq(OperandsVisitor)
    }
}

/// Immutable entry describing one completed arithmetic call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub id: RecordId,
    pub kind: OperationKind,
    pub operands: Operands,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

impl OperationRecord {
    /// Human-readable form of the call, e.g. `5 + 3` or `√25`.
    pub fn expression(&self) -> String {
        match self.operands {
            Operands::Unary(x) => format!("{}{x}", self.kind.symbol()),
            Operands::Binary(a, b) => format!("{a} {} {b}", self.kind.symbol()),
        }
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), self.result)
    }
}

/// Append-only log of completed operations, owned by a `Calculator`.
///
/// Record ids are dense and ascending starting at 1, so `len` and the
/// latest id always agree.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<OperationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperationRecord> {
        self.records.iter()
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&OperationRecord> {
        self.records.get(id.value() as usize - 1)
    }

    /// Most recently appended record, if any.
    pub fn latest(&self) -> Option<&OperationRecord> {
        self.records.last()
    }

    /// Append a completed operation. Only the calculator itself records;
    /// callers cannot forge history entries.
    pub(crate) fn append(
        &mut self,
        kind: OperationKind,
        operands: Operands,
        result: f64,
    ) -> &OperationRecord {
        let id = RecordId::new(self.records.len() as u32 + 1).expect("record ids start at 1");
        self.records.push(OperationRecord {
            id,
            kind,
            operands,
            result,
            timestamp: Utc::now(),
        });
        self.records.last().expect("record was just appended")
    }
}
