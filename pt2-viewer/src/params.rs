//! Startup configuration from the ROS parameter server.

use log::{debug, warn};
use thiserror::Error;

pub const PARAM_WIDTH: &str = "initWidth";
pub const PARAM_HEIGHT: &str = "initHeight";
pub const PARAM_FPS: &str = "FPS";

const DEFAULT_WIDTH: i32 = 800;
const DEFAULT_HEIGHT: i32 = 600;
const DEFAULT_FPS: i32 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("Can not get the value from launch file (none of `initWidth`, `initHeight`, `FPS` is set).")]
    Missing,

    #[error("The parameter `{name}` must be positive, but is {value}.")]
    Invalid { name: &'static str, value: i32 },
}

/// Somewhere to read integer parameters from.
pub trait ParamSource {
    /// Returns the value of the parameter, or [None] if it is not set or not an integer.
    fn get_i32(&self, name: &str) -> Option<i32>;
}

/// The ROS parameter server.
pub struct RosParamServer;

impl ParamSource for RosParamServer {
    fn get_i32(&self, name: &str) -> Option<i32> {
        let param = rosrust::param(name)?;
        match param.get::<i32>() {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Parameter `{name}` not available: {e}");
                None
            }
        }
    }
}

/// Values read at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerParams {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl ViewerParams {
    /// Reads the window size and frame rate.
    ///
    /// Each parameter is looked up in the private namespace of the node (`~name`) first, and
    /// then relative to the node namespace (`name`). Parameters that can not be read keep their
    /// default value. Fails, if not a single one of them can be read.
    pub fn load(source: &impl ParamSource) -> Result<Self, ParamError> {
        let lookup = |name: &str| {
            source
                .get_i32(&format!("~{name}"))
                .or_else(|| source.get_i32(name))
        };
        let width = lookup(PARAM_WIDTH);
        let height = lookup(PARAM_HEIGHT);
        let fps = lookup(PARAM_FPS);
        if width.is_none() && height.is_none() && fps.is_none() {
            return Err(ParamError::Missing);
        }

        let value = |name: &'static str, value: Option<i32>, default: i32| match value {
            None => {
                warn!("Parameter `{name}` is not set, using {default}.");
                Ok(default as u32)
            }
            Some(v) if v > 0 => Ok(v as u32),
            Some(v) => Err(ParamError::Invalid { name, value: v }),
        };
        Ok(ViewerParams {
            width: value(PARAM_WIDTH, width, DEFAULT_WIDTH)?,
            height: value(PARAM_HEIGHT, height, DEFAULT_HEIGHT)?,
            fps: value(PARAM_FPS, fps, DEFAULT_FPS)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{ParamError, ParamSource, ViewerParams};
    use std::collections::HashMap;

    struct MapSource(HashMap<&'static str, i32>);

    impl ParamSource for MapSource {
        fn get_i32(&self, name: &str) -> Option<i32> {
            self.0.get(name).copied()
        }
    }

    fn source(values: &[(&'static str, i32)]) -> MapSource {
        MapSource(values.iter().copied().collect())
    }

    #[test]
    fn test_missing_all() {
        assert_eq!(ViewerParams::load(&source(&[])), Err(ParamError::Missing));
    }

    #[test]
    fn test_all_set() {
        let params = ViewerParams::load(&source(&[
            ("initWidth", 1024),
            ("initHeight", 768),
            ("FPS", 30),
        ]))
        .unwrap();
        assert_eq!(
            params,
            ViewerParams {
                width: 1024,
                height: 768,
                fps: 30
            }
        );
    }

    #[test]
    fn test_partial_uses_defaults() {
        let params = ViewerParams::load(&source(&[("FPS", 10)])).unwrap();
        assert_eq!(
            params,
            ViewerParams {
                width: 800,
                height: 600,
                fps: 10
            }
        );
    }

    #[test]
    fn test_private_parameter_wins() {
        let params =
            ViewerParams::load(&source(&[("~initWidth", 320), ("initWidth", 640)])).unwrap();
        assert_eq!(params.width, 320);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            ViewerParams::load(&source(&[("FPS", 0)])),
            Err(ParamError::Invalid {
                name: "FPS",
                value: 0
            })
        );
        assert_eq!(
            ViewerParams::load(&source(&[("initHeight", -5), ("FPS", 30)])),
            Err(ParamError::Invalid {
                name: "initHeight",
                value: -5
            })
        );
    }
}
