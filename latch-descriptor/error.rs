#[derive(Debug)]
pub enum LatchError {
    InvalidImageSize { width: usize, height: usize },
    InvalidStride { stride: usize, width: usize },
    InvalidImageData { expected_len: usize, actual_len: usize },
    OutputTooSmall { expected_len: usize, actual_len: usize },
    InvalidThreadCount(usize),
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl std::fmt::Display for LatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatchError::InvalidImageSize { width, height } => {
                write!(f, "Invalid image dimensions: {}x{} (must be > 0)", width, height)
            }
            LatchError::InvalidStride { stride, width } => {
                write!(f, "Row stride {} is smaller than image width {}", stride, width)
            }
            LatchError::InvalidImageData { expected_len, actual_len } => {
                write!(f, "Image data too short: expected at least {}, got {}", expected_len, actual_len)
            }
            LatchError::OutputTooSmall { expected_len, actual_len } => {
                write!(f, "Descriptor buffer too small: expected at least {}, got {}", expected_len, actual_len)
            }
            LatchError::InvalidThreadCount(n) => {
                write!(f, "Invalid thread count: {} (must be >= 1)", n)
            }
            LatchError::ThreadPool(e) => write!(f, "Thread pool error: {}", e),
        }
    }
}

impl std::error::Error for LatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LatchError::ThreadPool(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for LatchError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        LatchError::ThreadPool(err)
    }
}

pub type LatchResult<T> = Result<T, LatchError>;
