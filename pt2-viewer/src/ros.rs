use anyhow::{Result, anyhow};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info};
use rosrust_msg::sensor_msgs::PointCloud2;
use std::time::Duration;

/// Connects to the ROS master.
pub fn init(node_name: &str) -> Result<()> {
    info!("Connecting to ROS master...");
    if let Err(e) = rosrust::try_init_with_options(node_name, false) {
        return Err(anyhow!("Failed to connect to ROS master: {e}"));
    }
    info!("Connected to ROS master.");
    Ok(())
}

/// What the viewer keeps from a received PointCloud2 message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudSummary {
    pub frame_id: String,
    pub time_stamp: Duration,
    pub width: u32,
    pub height: u32,
    pub point_step: u32,
    pub fields: Vec<String>,
}

impl CloudSummary {
    pub fn from_message(msg: &PointCloud2) -> Self {
        CloudSummary {
            frame_id: msg.header.frame_id.clone(),
            time_stamp: Duration::new(msg.header.stamp.sec as u64, msg.header.stamp.nsec),
            width: msg.width,
            height: msg.height,
            point_step: msg.point_step,
            fields: msg.fields.iter().map(|f| f.name.clone()).collect(),
        }
    }

    pub fn nr_points(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Receiving end for point cloud messages, drained once per frame on the frame loop thread.
pub struct CloudInbox {
    receiver: Receiver<CloudSummary>,
    nr_received: u64,
    latest: Option<CloudSummary>,
}

impl CloudInbox {
    pub fn new(receiver: Receiver<CloudSummary>) -> Self {
        CloudInbox {
            receiver,
            nr_received: 0,
            latest: None,
        }
    }

    /// Handles all messages, that arrived since the last call.
    /// Returns the number of handled messages.
    pub fn poll(&mut self) -> usize {
        let mut nr_handled = 0;
        for summary in self.receiver.try_iter() {
            info!(
                "Point cloud received: frame `{}`, {} points",
                summary.frame_id,
                summary.nr_points()
            );
            debug!(
                "Point cloud fields: [{}], point step: {} bytes",
                summary.fields.join(", "),
                summary.point_step
            );
            self.latest = Some(summary);
            nr_handled += 1;
        }
        self.nr_received += nr_handled as u64;
        nr_handled
    }

    /// Total number of received messages.
    pub fn nr_received(&self) -> u64 {
        self.nr_received
    }

    /// The last received message.
    pub fn latest(&self) -> Option<&CloudSummary> {
        self.latest.as_ref()
    }
}

/// Subscription to a PointCloud2 topic.
///
/// The ROS callback runs on a thread owned by rosrust. It only forwards a summary of the message
/// to the [CloudInbox], so all the viewer state stays on the frame loop thread.
pub struct PointCloudSubscription {
    _subscriber: rosrust::Subscriber,
    inbox: CloudInbox,
}

impl PointCloudSubscription {
    pub fn subscribe(topic: &str, queue_size: usize) -> Result<Self> {
        info!("Subscribing to point cloud topic `{topic}` ...");
        let (sender, receiver) = crossbeam_channel::bounded(queue_size.max(1));
        let callback = move |msg: PointCloud2| forward(&sender, CloudSummary::from_message(&msg));
        let subscriber = match rosrust::subscribe(topic, queue_size, callback) {
            Ok(s) => s,
            Err(e) => {
                return Err(anyhow!(
                    "Failed to subscribe to point cloud topic `{topic}`: {e}"
                ));
            }
        };
        info!("Subscribed to point cloud topic.");
        Ok(PointCloudSubscription {
            _subscriber: subscriber,
            inbox: CloudInbox::new(receiver),
        })
    }

    pub fn inbox(&self) -> &CloudInbox {
        &self.inbox
    }

    pub fn inbox_mut(&mut self) -> &mut CloudInbox {
        &mut self.inbox
    }
}

fn forward(sender: &Sender<CloudSummary>, summary: CloudSummary) {
    match sender.try_send(summary) {
        Ok(()) => (),
        Err(TrySendError::Full(summary)) => {
            debug!(
                "Frame loop is behind, dropping point cloud from frame `{}`",
                summary.frame_id
            );
        }
        Err(TrySendError::Disconnected(_)) => (),
    }
}

#[cfg(test)]
mod test {
    use super::{CloudInbox, CloudSummary, forward};
    use rosrust_msg::sensor_msgs::{PointCloud2, PointField};
    use std::time::Duration;

    fn summary(frame_id: &str) -> CloudSummary {
        CloudSummary {
            frame_id: frame_id.to_string(),
            time_stamp: Duration::ZERO,
            width: 10,
            height: 2,
            point_step: 16,
            fields: vec!["x".to_string(), "y".to_string(), "z".to_string()],
        }
    }

    #[test]
    fn test_summary_from_message() {
        let mut msg = PointCloud2::default();
        msg.header.frame_id = "livox_frame".to_string();
        msg.header.stamp.sec = 12;
        msg.header.stamp.nsec = 500;
        msg.width = 9984;
        msg.height = 1;
        msg.point_step = 18;
        for name in ["x", "y", "z", "intensity"] {
            msg.fields.push(PointField {
                name: name.to_string(),
                ..Default::default()
            });
        }

        let summary = CloudSummary::from_message(&msg);
        assert_eq!(summary.frame_id, "livox_frame");
        assert_eq!(summary.time_stamp, Duration::new(12, 500));
        assert_eq!(summary.nr_points(), 9984);
        assert_eq!(summary.fields, vec!["x", "y", "z", "intensity"]);
    }

    #[test]
    fn test_poll_drains_everything() {
        let (sender, receiver) = crossbeam_channel::bounded(10);
        let mut inbox = CloudInbox::new(receiver);
        assert_eq!(inbox.poll(), 0);
        assert!(inbox.latest().is_none());

        forward(&sender, summary("a"));
        forward(&sender, summary("b"));
        assert_eq!(inbox.poll(), 2);
        assert_eq!(inbox.poll(), 0);
        assert_eq!(inbox.nr_received(), 2);
        assert_eq!(inbox.latest().unwrap().frame_id, "b");
    }

    #[test]
    fn test_full_inbox_drops_newest() {
        let (sender, receiver) = crossbeam_channel::bounded(1);
        let mut inbox = CloudInbox::new(receiver);
        forward(&sender, summary("a"));
        forward(&sender, summary("b"));
        assert_eq!(inbox.poll(), 1);
        assert_eq!(inbox.latest().unwrap().frame_id, "a");
    }
}
