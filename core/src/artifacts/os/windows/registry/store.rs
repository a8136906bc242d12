use super::error::RegistryError;
use std::fmt;

/// Result of reading one value during enumeration
pub type ValueRead = Result<RegistryValue, RegistryError>;

/**
 * Read only access to Registry values for one or more user profiles.
 * Implementations decide where the data comes from (live hive, export file, memory)
 */
pub trait RegistryStore: Send + Sync {
    /**
     * Enumerate every value directly under `key_path` for `identity`.
     * An outer error means the key could not be enumerated at all.
     * Inner errors are single values that could not be read
     */
    fn enumerate_values(&self, identity: &str, key_path: &str)
        -> Result<Vec<ValueRead>, RegistryError>;

    /// Every identity (user profile) the store holds data for
    fn identities(&self) -> Vec<String>;

    /// Where the data for `identity` came from
    fn source(&self, identity: &str) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryValue {
    pub name: String,
    pub value_type: ValueType,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    RegNone,
    RegSz,
    RegExpandSz,
    RegBinary,
    RegDword,
    RegDwordBigEndian,
    RegLink,
    RegMultiSz,
    RegResourceList,
    RegFullResourceDescriptor,
    RegResourceRequirementsList,
    RegQword,
    Unknown,
}

impl ValueType {
    /// Map the numeric type stored in a value key
    pub fn from_raw(value_type: u32) -> ValueType {
        match value_type {
            0x0 => ValueType::RegNone,
            0x1 => ValueType::RegSz,
            0x2 => ValueType::RegExpandSz,
            0x3 => ValueType::RegBinary,
            0x4 => ValueType::RegDword,
            0x5 => ValueType::RegDwordBigEndian,
            0x6 => ValueType::RegLink,
            0x7 => ValueType::RegMultiSz,
            0x8 => ValueType::RegResourceList,
            0x9 => ValueType::RegFullResourceDescriptor,
            0xa => ValueType::RegResourceRequirementsList,
            0xb => ValueType::RegQword,
            _ => ValueType::Unknown,
        }
    }

    /// Map the textual type name used in Registry exports. Ex: `REG_BINARY`
    pub fn from_name(name: &str) -> ValueType {
        match name.to_uppercase().as_str() {
            "REG_NONE" => ValueType::RegNone,
            "REG_SZ" => ValueType::RegSz,
            "REG_EXPAND_SZ" => ValueType::RegExpandSz,
            "REG_BINARY" => ValueType::RegBinary,
            "REG_DWORD" => ValueType::RegDword,
            "REG_DWORD_BIG_ENDIAN" => ValueType::RegDwordBigEndian,
            "REG_LINK" => ValueType::RegLink,
            "REG_MULTI_SZ" => ValueType::RegMultiSz,
            "REG_RESOURCE_LIST" => ValueType::RegResourceList,
            "REG_FULL_RESOURCE_DESCRIPTOR" => ValueType::RegFullResourceDescriptor,
            "REG_RESOURCE_REQUIREMENTS_LIST" => ValueType::RegResourceRequirementsList,
            "REG_QWORD" => ValueType::RegQword,
            _ => ValueType::Unknown,
        }
    }

    /// Raw bytes (exported as base64) rather than text
    pub fn is_binary_encoded(&self) -> bool {
        matches!(
            self,
            ValueType::RegNone
                | ValueType::RegBinary
                | ValueType::RegResourceList
                | ValueType::RegFullResourceDescriptor
                | ValueType::RegResourceRequirementsList
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::RegNone => "REG_NONE",
            ValueType::RegSz => "REG_SZ",
            ValueType::RegExpandSz => "REG_EXPAND_SZ",
            ValueType::RegBinary => "REG_BINARY",
            ValueType::RegDword => "REG_DWORD",
            ValueType::RegDwordBigEndian => "REG_DWORD_BIG_ENDIAN",
            ValueType::RegLink => "REG_LINK",
            ValueType::RegMultiSz => "REG_MULTI_SZ",
            ValueType::RegResourceList => "REG_RESOURCE_LIST",
            ValueType::RegFullResourceDescriptor => "REG_FULL_RESOURCE_DESCRIPTOR",
            ValueType::RegResourceRequirementsList => "REG_RESOURCE_REQUIREMENTS_LIST",
            ValueType::RegQword => "REG_QWORD",
            ValueType::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}
