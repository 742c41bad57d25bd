use log::info;

/// Track progress of monthly archive fetching
pub struct FetchProgress {
    total: usize,
    fetched: usize,
    games: usize,
}

impl FetchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            fetched: 0,
            games: 0,
        }
    }

    pub fn record_archive(&mut self, game_count: usize) {
        self.fetched += 1;
        self.games += game_count;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.fetched
    }

    pub fn game_count(&self) -> usize {
        self.games
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → Progress: {}/{} archives ({} games)",
                current, self.total, self.games
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
