//! Options controlling how two answers are compared.

/// Options controlling how two answers are compared.
///
/// Each flag selects a distinct comparison strategy, and at most one strategy flag is expected
/// to be meaningfully set per call. When several are set, the orchestrator's dispatch order
/// defines precedence: domain restriction, then complex number, then multiple solutions, then
/// the simplification and factorization checks, then the generic path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GradingOptions {
    /// Reject a numeric fraction that is not in lowest terms, even if numerically correct.
    pub require_simplified: bool,

    /// Require the answer to have the same number of factors as the reference.
    pub require_full_factorization: bool,

    /// Compare the answers as unordered sets of solutions.
    pub allow_multiple_solutions: bool,

    /// Require a constant of integration on both sides.
    pub is_integral: bool,

    /// Compare the answers as domain-restriction statements.
    pub is_domain_restriction: bool,

    /// Compare the answers as complex numbers.
    pub is_complex_number: bool,
}
