use thiserror::Error;

/// Failures reported by the bounds-checked accessors of the containers.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ContainerError {
    /// A positional access past the end.
    #[error("index {index} out of range for container of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A keyed access for a key the container does not hold.
    #[error("key not found")]
    KeyNotFound,

    /// An operation that needs at least one element, e.g. `front`.
    #[error("`{0}` called on an empty container")]
    Empty(&'static str),

    /// A capacity request larger than the container can represent.
    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    CapacityOverflow { requested: usize, max: usize },
}

impl ContainerError {
    /// Checks `index < len`.
    pub fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}

#[test]
fn messages() {
    assert_eq!(
        ContainerError::IndexOutOfRange { index: 3, len: 2 }.to_string(),
        "index 3 out of range for container of length 2"
    );
    assert_eq!(ContainerError::KeyNotFound.to_string(), "key not found");
    assert_eq!(
        ContainerError::Empty("front").to_string(),
        "`front` called on an empty container"
    );
    assert_eq!(
        ContainerError::CapacityOverflow { requested: 10, max: 4 }.to_string(),
        "requested capacity 10 exceeds the maximum of 4"
    );
    assert!(ContainerError::check_index(1, 2).is_ok());
    assert_eq!(
        ContainerError::check_index(2, 2),
        Err(ContainerError::IndexOutOfRange { index: 2, len: 2 })
    );
}
