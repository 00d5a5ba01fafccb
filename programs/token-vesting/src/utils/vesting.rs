//! Linear vesting math.
//! - vested(now) = 0 at or before start, total at or after end,
//!   floor(total * elapsed / duration) in between
//! - claimable(now) = vested(now) - total_withdrawn
//! Products are widened to u128 before the floor division, so truncation
//! is the only rounding and the vested amount never exceeds the true
//! linear value.

use crate::error::VestingError;

/// Amount vested at `now_ts` under a linear unlock between `start_ts`
/// and `end_ts`.
pub fn vested_amount(
    start_ts: i64,
    end_ts: i64,
    total_amount: u64,
    now_ts: i64,
) -> Result<u64, VestingError> {
    if now_ts <= start_ts {
        return Ok(0);
    }
    if now_ts >= end_ts {
        return Ok(total_amount);
    }
    // start < now < end here, so both differences are positive and the
    // divisor is non-zero.
    let elapsed = now_ts
        .checked_sub(start_ts)
        .ok_or(VestingError::MathOverflow)? as u128;
    let duration = end_ts
        .checked_sub(start_ts)
        .ok_or(VestingError::MathOverflow)? as u128;
    let vested = (total_amount as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

/// Vested amount minus what has already been withdrawn.
/// `total_withdrawn > vested` indicates corrupted state and maps to
/// `MathOverflow` rather than silently clamping.
pub fn claimable_amount(
    start_ts: i64,
    end_ts: i64,
    total_amount: u64,
    total_withdrawn: u64,
    now_ts: i64,
) -> Result<u64, VestingError> {
    let vested = vested_amount(start_ts, end_ts, total_amount, now_ts)?;
    vested
        .checked_sub(total_withdrawn)
        .ok_or(VestingError::MathOverflow)
}

/// Creation-time schedule guard: bounds ordered, entitlement non-zero.
/// Out-of-range schedules are rejected here, never clamped later.
pub fn validate_schedule(
    start_ts: i64,
    end_ts: i64,
    total_amount: u64,
) -> Result<(), VestingError> {
    if start_ts >= end_ts {
        return Err(VestingError::InvalidSchedule);
    }
    if total_amount == 0 {
        return Err(VestingError::InvalidAmount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = 31_536_000;
    const START: i64 = 1_700_000_000;

    #[test]
    fn zero_at_and_before_start() {
        assert_eq!(vested_amount(START, START + YEAR, 1_000, START).unwrap(), 0);
        assert_eq!(
            vested_amount(START, START + YEAR, 1_000, START - 1).unwrap(),
            0
        );
        assert_eq!(
            vested_amount(START, START + YEAR, u64::MAX, i64::MIN).unwrap(),
            0
        );
    }

    #[test]
    fn full_amount_at_and_after_end() {
        let end = START + YEAR;
        assert_eq!(vested_amount(START, end, 1_000, end).unwrap(), 1_000);
        assert_eq!(vested_amount(START, end, 1_000, end + 1).unwrap(), 1_000);
        assert_eq!(
            vested_amount(START, end, u64::MAX, i64::MAX).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn half_year_exact_division() {
        // One-year schedule over an evenly dividing total: the halfway
        // point vests exactly half.
        let total = 100_000_000u64;
        let end = START + YEAR;
        let half = START + YEAR / 2;
        assert_eq!(vested_amount(START, end, total, half).unwrap(), 50_000_000);
        assert_eq!(
            claimable_amount(START, end, total, 0, half).unwrap(),
            50_000_000
        );
        // Claim the full half, then re-quote at the same instant.
        assert_eq!(claimable_amount(START, end, total, 50_000_000, half).unwrap(), 0);
        // At end, only the unclaimed half remains.
        assert_eq!(
            claimable_amount(START, end, total, 50_000_000, end).unwrap(),
            50_000_000
        );
    }

    #[test]
    fn monotonically_non_decreasing() {
        let total = 999_999_937u64; // prime, exercises truncation
        let end = START + YEAR;
        let mut prev = 0u64;
        let mut now = START - 10;
        while now <= end + 10 {
            let v = vested_amount(START, end, total, now).unwrap();
            assert!(v >= prev, "vested decreased at now={now}");
            prev = v;
            now += 86_399; // deliberately misaligned step
        }
        assert_eq!(prev, total);
    }

    #[test]
    fn truncation_never_exceeds_linear_value() {
        let total = 1_000_003u64;
        let end = START + 7_777_777;
        for offset in [1, 2, 3, 1_000_000, 3_333_333, 7_777_776] {
            let now = START + offset;
            let v = vested_amount(START, end, total, now).unwrap() as u128;
            // v = floor(total * elapsed / duration) implies
            // v * duration <= total * elapsed.
            assert!(v * 7_777_777 <= total as u128 * offset as u128);
            // And the floor is tight: (v + 1) would overshoot.
            assert!((v + 1) * 7_777_777 > total as u128 * offset as u128);
        }
    }

    #[test]
    fn no_overflow_at_max_amount() {
        // total * elapsed overflows u64 by a wide margin; the u128
        // widening must absorb it.
        let end = START + YEAR;
        let now = START + YEAR / 2;
        let v = vested_amount(START, end, u64::MAX, now).unwrap();
        assert_eq!(v, u64::MAX / 2);
    }

    #[test]
    fn claimable_bounded_by_remaining_entitlement() {
        let total = 5_000u64;
        let end = START + 1_000;
        for withdrawn in [0u64, 1, 2_499, 2_500] {
            for offset in [1i64, 500, 999, 1_000, 2_000] {
                let now = START + offset;
                match claimable_amount(START, end, total, withdrawn, now) {
                    Ok(c) => assert!(c <= total - withdrawn),
                    // Early in the schedule the vested amount may still
                    // trail what was already withdrawn.
                    Err(e) => assert!(matches!(e, VestingError::MathOverflow)),
                }
            }
        }
    }

    #[test]
    fn interval_claims_sum_to_total() {
        // Claim at arbitrary instants, always for the full claimable
        // amount; the sum of claims never exceeds the entitlement and
        // reaches it exactly at the end.
        let total = 123_456_789u64;
        let end = START + YEAR;
        let mut withdrawn = 0u64;
        for now in [
            START + 1,
            START + 86_400,
            START + YEAR / 3,
            START + YEAR / 2 + 17,
            START + YEAR - 1,
            START + YEAR,
        ] {
            let c = claimable_amount(START, end, total, withdrawn, now).unwrap();
            withdrawn += c;
            assert!(withdrawn <= total);
        }
        assert_eq!(withdrawn, total);
    }

    #[test]
    fn repeat_claim_at_same_instant_yields_zero() {
        let total = 100_000_000u64;
        let end = START + YEAR;
        let now = START + YEAR / 2;
        let first = claimable_amount(START, end, total, 0, now).unwrap();
        assert_eq!(first, 50_000_000);
        let second = claimable_amount(START, end, total, first, now).unwrap();
        assert_eq!(second, 0);
    }

    #[test]
    fn validate_schedule_rejects_bad_input() {
        assert!(matches!(
            validate_schedule(10, 10, 1).unwrap_err(),
            VestingError::InvalidSchedule
        ));
        assert!(matches!(
            validate_schedule(11, 10, 1).unwrap_err(),
            VestingError::InvalidSchedule
        ));
        assert!(matches!(
            validate_schedule(0, 10, 0).unwrap_err(),
            VestingError::InvalidAmount
        ));
        assert!(validate_schedule(0, 1, 1).is_ok());
        assert!(validate_schedule(-100, -50, u64::MAX).is_ok());
    }

    #[test]
    fn one_second_schedule() {
        // Shortest valid schedule: nothing at start, everything at end.
        let end = START + 1;
        assert_eq!(vested_amount(START, end, 7, START).unwrap(), 0);
        assert_eq!(vested_amount(START, end, 7, end).unwrap(), 7);
    }
}
