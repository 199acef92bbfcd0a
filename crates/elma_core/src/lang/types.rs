//! Go basic types known to the backend.
//!
//! The backend only needs these to fill in zero values for struct fields that a keyed composite literal leaves out.

/// Stable identifier for the predeclared basic types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicTypeId {
    Bool,
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Byte,
    Rune,
}

/// Registry entry: source spelling and the JavaScript literal for the type's zero value.
#[derive(Debug, Clone, Copy)]
pub struct BasicTypeInfo {
    pub id: BasicTypeId,
    pub spelling: &'static str,
    pub zero_value: &'static str,
}

/// Registry of all basic types.
pub const BASIC_TYPES: &[BasicTypeInfo] = &[
    basic(BasicTypeId::Bool, "bool", "false"),
    basic(BasicTypeId::String, "string", "\"\""),
    basic(BasicTypeId::Int, "int", "0"),
    basic(BasicTypeId::Int8, "int8", "0"),
    basic(BasicTypeId::Int16, "int16", "0"),
    basic(BasicTypeId::Int32, "int32", "0"),
    basic(BasicTypeId::Int64, "int64", "0"),
    basic(BasicTypeId::Uint, "uint", "0"),
    basic(BasicTypeId::Uint8, "uint8", "0"),
    basic(BasicTypeId::Uint16, "uint16", "0"),
    basic(BasicTypeId::Uint32, "uint32", "0"),
    basic(BasicTypeId::Uint64, "uint64", "0"),
    basic(BasicTypeId::Uintptr, "uintptr", "0"),
    basic(BasicTypeId::Float32, "float32", "0"),
    basic(BasicTypeId::Float64, "float64", "0"),
    basic(BasicTypeId::Byte, "byte", "0"),
    basic(BasicTypeId::Rune, "rune", "0"),
];

/// JavaScript value used where no zero value is known (structs, pointers, slices, maps, funcs).
pub const UNKNOWN_ZERO_VALUE: &str = "undefined";

/// Resolve a type name to its basic type id.
pub fn from_str(name: &str) -> Option<BasicTypeId> {
    BASIC_TYPES.iter().find(|t| t.spelling == name).map(|t| t.id)
}

/// JavaScript zero value for a type name, falling back to [`UNKNOWN_ZERO_VALUE`].
pub fn zero_value_for(name: &str) -> &'static str {
    BASIC_TYPES
        .iter()
        .find(|t| t.spelling == name)
        .map_or(UNKNOWN_ZERO_VALUE, |t| t.zero_value)
}

const fn basic(id: BasicTypeId, spelling: &'static str, zero_value: &'static str) -> BasicTypeInfo {
    BasicTypeInfo { id, spelling, zero_value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_types_zero_to_zero() {
        assert_eq!(zero_value_for("int"), "0");
        assert_eq!(zero_value_for("float64"), "0");
        assert_eq!(zero_value_for("rune"), "0");
    }

    #[test]
    fn string_and_bool_zero_values() {
        assert_eq!(zero_value_for("string"), "\"\"");
        assert_eq!(zero_value_for("bool"), "false");
    }

    #[test]
    fn unknown_types_fall_back_to_undefined() {
        assert_eq!(zero_value_for("Timer"), UNKNOWN_ZERO_VALUE);
        assert_eq!(from_str("complex128"), None);
    }
}
