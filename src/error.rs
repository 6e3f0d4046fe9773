//! Error types and handling for Carousel

/// Result type alias for Carousel operations
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Error types for ring buffer operations
///
/// Both variants signal transient, recoverable conditions. The buffer's
/// invariants are intact after any error and a rejected operation commits
/// nothing, single-item and bulk alike.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// Insertion would exceed the buffer's capacity
    #[error("buffer is full: requested {requested}, available {available}")]
    Capacity { requested: usize, available: usize },

    /// Fewer elements are stored than the operation asked for
    #[error("buffer is empty: requested {requested}, available {available}")]
    Underflow { requested: usize, available: usize },
}

impl CarouselError {
    /// Create a capacity error
    pub fn capacity(requested: usize, available: usize) -> Self {
        Self::Capacity {
            requested,
            available,
        }
    }

    /// Create an underflow error
    pub fn underflow(requested: usize, available: usize) -> Self {
        Self::Underflow {
            requested,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CarouselError::capacity(3, 1);
        assert!(matches!(
            err,
            CarouselError::Capacity {
                requested: 3,
                available: 1
            }
        ));

        let err = CarouselError::underflow(2, 0);
        assert!(matches!(err, CarouselError::Underflow { .. }));
    }

    #[test]
    fn test_error_display() {
        let display = format!("{}", CarouselError::capacity(1, 0));
        assert!(display.contains("buffer is full"));

        let display = format!("{}", CarouselError::underflow(4, 2));
        assert!(display.contains("buffer is empty"));
        assert!(display.contains("requested 4"));
    }
}
