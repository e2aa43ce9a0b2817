use super::ValueType;
use ValueType::*;

impl ValueType {
    /// Target-indexed widening table: for each target, the source types allowed to flow into it.
    ///
    /// The relation is directed. `Byte` may flow into `Int`, but `Int` may not flow into `Byte`.
    /// `Any` is handled separately by [`is_compatible`] and accepts everything in both directions.
    pub fn accepted_sources(self) -> &'static [ValueType] {
        match self {
            Void => &[],
            Int => &[Int, Byte, UInt8, Bool, Boolean, Char],
            Long => &[Long, Int, Byte, UInt8, UInt16, Bool, Boolean, Char],
            Float => &[Float, Int, Long, Byte, UInt8, UInt16, UInt32],
            Double => &[Double, Float, Int, Long, Byte, UInt8, UInt16, UInt32],
            Bool => &[Bool, Boolean, Int, Byte],
            Boolean => &[Boolean, Bool, Int, Byte],
            Byte => &[Byte, UInt8, Char],
            Char => &[Char, Byte, UInt8],
            String => &[String, CharPtr],
            UInt8 => &[UInt8, Byte, Char],
            UInt16 => &[UInt16, Int],
            UInt32 => &[UInt32, Long, UnsignedLong],
            UnsignedLong => &[UnsignedLong, UInt32, Long],
            IntPtr => &[IntPtr],
            CharPtr => &[CharPtr, String],
            Any => &ValueType::ALL,
        }
    }

    /// Whether a value of type `source` may be connected into a port of this type.
    pub fn accepts(self, source: ValueType) -> bool {
        is_compatible(source, self)
    }
}

/// Checks whether a value of type `source` can flow into a port of type `target`.
pub fn is_compatible(source: ValueType, target: ValueType) -> bool {
    if source == Any || target == Any {
        return true;
    }
    target.accepted_sources().contains(&source)
}
