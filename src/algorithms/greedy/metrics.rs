//! Quantities the greedy rules rank agents by.

use crate::instance::Agent;

/// Payload position after `first` then `second` push a payload at `payload`.
///
/// Either push is skipped when the agent cannot reach the payload at its turn.
pub fn pair_reach(first: &Agent, second: &Agent, payload: f64) -> f64 {
    second.push_from(first.push_from(payload))
}

/// Reaches of both orders of a pair: `(a then b, b then a)`.
pub fn pair_reaches(a: &Agent, b: &Agent, payload: f64) -> (f64, f64) {
    (pair_reach(a, b, payload), pair_reach(b, a, payload))
}

/// Returns true if `a` should go before `b`: "a then b" reaches strictly
/// farther than "b then a".
pub fn goes_first(a: &Agent, b: &Agent, payload: f64) -> bool {
    let (ab, ba) = pair_reaches(a, b, payload);
    ab > ba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_reaches_both_orders() {
        let a = Agent::new(5.0, 37.0);
        let b = Agent::new(13.0, 32.0);
        assert_eq!(pair_reaches(&a, &b, 0.0), (45.0, 42.0));
        assert!(goes_first(&a, &b, 0.0));
        assert!(!goes_first(&b, &a, 0.0));
    }

    #[test]
    fn co_located_agents() {
        let a = Agent::new(2.0, 4.0);
        let b = Agent::new(2.0, 3.0);
        assert_eq!(pair_reaches(&a, &b, 0.0), (5.0, 4.0));
    }

    #[test]
    fn agent_never_beats_itself() {
        let a = Agent::new(1.0, 2.0);
        assert!(!goes_first(&a, &a, 0.0));
    }

    #[test]
    fn unreachable_second_push_is_skipped() {
        let a = Agent::new(0.5, 1.0);
        let far = Agent::new(10.0, 1.0);
        assert_eq!(pair_reach(&a, &far, 0.0), 0.5);
    }
}
