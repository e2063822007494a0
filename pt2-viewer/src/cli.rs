use clap::Parser;

/// Viewer that subscribes to a ROS PointCloud2 topic and renders it in a window.
///
/// The window size and frame rate are read from the ROS parameter server
/// (`initWidth`, `initHeight`, `FPS`), usually set from a launch file.
///
/// The connection to ROS should be established automatically if you are within the ROS environment. If the connection fails, you can set the following ROS connection options:
///
///  - The master URL:
///     via command line: `__master:=http://localhost:11311/`
///     via environment variable: `ROS_MASTER_URI=http://localhost:11311/`
///  - The ros hostname or ip address:
///     via command line: `__hostname:=localhost` or `__ip:=127.0.0.1`
///     via environment variables: `ROS_HOSTNAME=localhost` or `ROS_IP=127.0.0.1`
///  - The ros namespace:
///     via command line: `__ns:=my_namespace`
///     via environment variable: `ROS_NAMESPACE=my_namespace`
///  - The node name:
///     via command line: `__name:=pt2_viewer`
#[derive(Debug, Parser)]
#[command(verbatim_doc_comment)]
pub struct AppOptions {
    /// Verbosity of the command line output.
    #[clap(long, default_value = "info")]
    pub log_level: log::Level,

    /// Name of the ROS node.
    #[clap(long, default_value = "pt2_viewer")]
    pub node_name: String,

    /// The ROS topic where the PointCloud2 messages are published.
    #[clap(long, default_value = "/livox/lidar")]
    pub pointcloud_topic: String,

    /// Number of incoming messages to buffer.
    #[clap(long, default_value = "100")]
    pub queue_size: usize,

    /// Title of the viewer window.
    #[clap(long, default_value = "PointCloud2 Viewer")]
    pub window_title: String,

    /// Do not synchronize buffer swaps with the display refresh rate.
    #[clap(long)]
    pub no_vsync: bool,
}

#[cfg(test)]
mod test {
    use super::AppOptions;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let options = AppOptions::parse_from(["pt2-viewer"]);
        assert_eq!(options.log_level, log::Level::Info);
        assert_eq!(options.pointcloud_topic, "/livox/lidar");
        assert_eq!(options.queue_size, 100);
        assert!(!options.no_vsync);
    }

    #[test]
    fn test_overrides() {
        let options = AppOptions::parse_from([
            "pt2-viewer",
            "--log-level",
            "trace",
            "--pointcloud-topic",
            "/cloud",
            "--no-vsync",
        ]);
        assert_eq!(options.log_level, log::Level::Trace);
        assert_eq!(options.pointcloud_topic, "/cloud");
        assert!(options.no_vsync);
    }
}
