use super::types::ContactPoint;

/// Start and latest position of the active contact.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleBuffer {
    start: Option<ContactPoint>,
    last: Option<ContactPoint>,
}

impl SampleBuffer {
    pub const fn new() -> Self {
        Self {
            start: None,
            last: None,
        }
    }

    pub fn record_start(&mut self, point: ContactPoint) {
        self.start = Some(point);
        self.last = Some(point);
    }

    /// Moves before a start are dropped; `start` never changes mid-session.
    pub fn record_move(&mut self, point: ContactPoint) {
        if self.start.is_some() {
            self.last = Some(point);
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.last = None;
    }

    pub fn start(&self) -> Option<ContactPoint> {
        self.start
    }

    pub fn last(&self) -> Option<ContactPoint> {
        self.last
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_seeds_both_points() {
        let mut buffer = SampleBuffer::new();
        buffer.record_start(ContactPoint::new(10.0, 20.0, 5));

        assert_eq!(buffer.start(), Some(ContactPoint::new(10.0, 20.0, 5)));
        assert_eq!(buffer.last(), Some(ContactPoint::new(10.0, 20.0, 5)));
    }

    #[test]
    fn move_overwrites_last_only() {
        let mut buffer = SampleBuffer::new();
        buffer.record_start(ContactPoint::new(10.0, 20.0, 0));
        buffer.record_move(ContactPoint::new(14.0, 21.0, 16));
        buffer.record_move(ContactPoint::new(30.0, 18.0, 32));

        assert_eq!(buffer.start(), Some(ContactPoint::new(10.0, 20.0, 0)));
        assert_eq!(buffer.last(), Some(ContactPoint::new(30.0, 18.0, 32)));
    }

    #[test]
    fn restart_drops_previous_last() {
        let mut buffer = SampleBuffer::new();
        buffer.record_start(ContactPoint::new(0.0, 0.0, 0));
        buffer.record_move(ContactPoint::new(90.0, 0.0, 50));
        buffer.record_start(ContactPoint::new(5.0, 5.0, 400));

        assert_eq!(buffer.last(), Some(ContactPoint::new(5.0, 5.0, 400)));
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut buffer = SampleBuffer::new();
        buffer.record_move(ContactPoint::new(1.0, 1.0, 1));

        assert!(buffer.is_empty());
        assert_eq!(buffer.last(), None);
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut buffer = SampleBuffer::new();
        buffer.record_start(ContactPoint::new(3.0, 4.0, 0));
        buffer.clear();

        assert_eq!(buffer, SampleBuffer::default());
    }
}
