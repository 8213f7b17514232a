//! MediaPipe Pose landmark indices (33 total)

pub const LANDMARK_COUNT: usize = 33;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_INDEX: usize = 19;
pub const RIGHT_INDEX: usize = 20;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Display name for the landmarks the joint table uses
pub fn landmark_name(index: usize) -> Option<&'static str> {
    let name = match index {
        LEFT_SHOULDER => "Left Shoulder",
        RIGHT_SHOULDER => "Right Shoulder",
        LEFT_ELBOW => "Left Elbow",
        RIGHT_ELBOW => "Right Elbow",
        LEFT_WRIST => "Left Wrist",
        RIGHT_WRIST => "Right Wrist",
        LEFT_INDEX => "Left Index",
        RIGHT_INDEX => "Right Index",
        LEFT_HIP => "Left Hip",
        RIGHT_HIP => "Right Hip",
        LEFT_KNEE => "Left Knee",
        RIGHT_KNEE => "Right Knee",
        LEFT_ANKLE => "Left Ankle",
        RIGHT_ANKLE => "Right Ankle",
        LEFT_HEEL => "Left Heel",
        RIGHT_HEEL => "Right Heel",
        LEFT_FOOT_INDEX => "Left Foot Index",
        RIGHT_FOOT_INDEX => "Right Foot Index",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_landmarks() {
        assert_eq!(landmark_name(LEFT_ELBOW), Some("Left Elbow"));
        assert_eq!(landmark_name(RIGHT_FOOT_INDEX), Some("Right Foot Index"));
        assert_eq!(landmark_name(NOSE), None);
        assert_eq!(landmark_name(LANDMARK_COUNT), None);
    }
}
