use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Process-wide quota for outbound geocoding calls.
pub fn geocoder_limiter(requests_per_minute: NonZeroU32) -> Limiter {
    Arc::new(RateLimiter::direct(Quota::per_minute(requests_per_minute)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_allows_an_initial_burst_up_to_quota() {
        let limiter = geocoder_limiter(NonZeroU32::new(3).unwrap());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }
}
