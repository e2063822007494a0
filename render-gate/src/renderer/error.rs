//! Error types returned by the rendering gate.

use crate::renderer::gate::{CameraId, ObjectId};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Shorthand for a [Result] with a [GateError].
pub type GateResult<T> = Result<T, GateError>;

/// Error type returned by the rendering gate.
#[derive(Debug)]
pub enum GateError {
    /// The gate was already finalized and its GPU resources are gone.
    Finalized,

    /// Some GPU operation was unsuccessful (e.g. because of not sufficient graphics memory)
    Graphics { source: Box<dyn Error + Send + Sync> },

    /// The camera, that was referred to, does not exist.
    CameraDoesNotExist {
        /// The id of the camera, that we tried to access.
        id: CameraId,
    },

    /// The debug object, that was referred to, does not exist.
    ObjectDoesNotExist {
        /// The id of the object, that we tried to access.
        id: ObjectId,
    },
}

impl GateError {
    pub(crate) fn graphics<E>(e: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        GateError::Graphics {
            source: Box::new(e),
        }
    }
}

impl Display for GateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            GateError::Finalized => write!(f, "The rendering gate is already finalized."),

            GateError::Graphics { source } => write!(f, "Gpu error: {}", source),

            GateError::CameraDoesNotExist { id } => {
                write!(f, "The camera {:?} does not exist.", id)
            }

            GateError::ObjectDoesNotExist { id } => {
                write!(f, "The debug object {:?} does not exist.", id)
            }
        }
    }
}

impl Error for GateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GateError::Graphics { source } => Some(&**source),
            GateError::Finalized => None,
            GateError::CameraDoesNotExist { .. } => None,
            GateError::ObjectDoesNotExist { .. } => None,
        }
    }
}
