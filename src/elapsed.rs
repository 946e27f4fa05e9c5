use crate::{SystemTime, UNIX_EPOCH};

pub fn now_millis() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_millis() as i64
}

pub fn elapsed_millis(start: i64, now: i64) -> u64 {
    if now < start {
        0
    } else {
        (now - start) as u64
    }
}

pub fn format(millis: u64) -> String {
    let hours = millis / 3_600_000;
    let minutes = (millis % 3_600_000) / 60_000;
    let seconds = (millis % 60_000) / 1_000;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    #[test]
    fn format() {
        assert_eq!(super::format(0), "00:00:00");
        assert_eq!(super::format(999), "00:00:00");
        assert_eq!(super::format(1_000), "00:00:01");
        assert_eq!(super::format(3_599_000), "00:59:59");
        assert_eq!(super::format(3_600_000), "01:00:00");
        assert_eq!(super::format(3_723_000), "01:02:03");
        assert_eq!(super::format(360_000_000), "100:00:00");
        assert_eq!(super::format(360_083_000), "100:01:23");
    }

    #[test]
    fn format_reconstruction() {
        for millis in [0u64, 999, 59_999, 3_599_999, 3_723_456, 86_400_000, 360_000_123] {
            let text = super::format(millis);
            let components: Vec<u64> = text.split(':').map(|component| component.parse().unwrap()).collect();
            assert_eq!(components.len(), 3);
            let reconstructed = components[0] * 3_600_000 + components[1] * 60_000 + components[2] * 1_000;
            assert!(reconstructed <= millis && millis - reconstructed <= 999);
        }
    }

    #[test]
    fn elapsed_millis() {
        assert_eq!(super::elapsed_millis(1_000, 4_500), 3_500);
        assert_eq!(super::elapsed_millis(1_000, 1_000), 0);
        assert_eq!(super::elapsed_millis(-2_000, 1_000), 3_000);
    }

    #[test]
    fn elapsed_millis_clamps_future_start() {
        assert_eq!(super::elapsed_millis(4_500, 1_000), 0);
        assert_eq!(super::elapsed_millis(1_000, -4_500), 0);
    }
}
