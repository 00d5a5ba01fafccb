//! Program-wide constants.

/// Seed prefix for the per-company treasury token account PDA.
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Seed prefix for employee vesting record PDAs.
pub const EMPLOYEE_SEED: &[u8] = b"employee";

/// Longest company name accepted; the name is itself a PDA seed and a
/// single seed cannot exceed 32 bytes.
pub const MAX_COMPANY_NAME_LEN: usize = 32;
