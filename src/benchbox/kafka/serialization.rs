/// Byte-level codec seam between typed payloads and the broker client.
pub trait Serializer<T> {
    /// Serialize a value to payload bytes
    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize payload bytes back into a value
    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializationError>;
}

/// Error raised when a payload cannot be encoded or decoded
#[derive(Debug)]
pub enum SerializationError {
    /// Payload bytes are not valid UTF-8
    InvalidUtf8(std::str::Utf8Error),
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationError::InvalidUtf8(e) => write!(f, "invalid UTF-8 payload: {}", e),
        }
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializationError::InvalidUtf8(e) => Some(e),
        }
    }
}

impl From<std::str::Utf8Error> for SerializationError {
    fn from(err: std::str::Utf8Error) -> Self {
        SerializationError::InvalidUtf8(err)
    }
}

/// Treats payloads as plain UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSerializer;

impl Serializer<String> for StringSerializer {
    fn serialize(&self, value: &String) -> Result<Vec<u8>, SerializationError> {
        Ok(value.as_bytes().to_vec())
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<String, SerializationError> {
        Ok(std::str::from_utf8(bytes)?.to_string())
    }
}

/// Passes payload bytes through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesSerializer;

impl Serializer<Vec<u8>> for BytesSerializer {
    fn serialize(&self, value: &Vec<u8>) -> Result<Vec<u8>, SerializationError> {
        Ok(value.clone())
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Vec<u8>, SerializationError> {
        Ok(bytes.to_vec())
    }
}
