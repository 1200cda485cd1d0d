/// Read-only primality table for `[0, n)`
/// Built once with a sieve of Eratosthenes and passed to whoever needs it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeMask {
    mask: Vec<bool>,
}

impl PrimeMask {

    pub fn new(n: usize) -> Self {
        let mut mask = vec![true; n];
        for slot in mask.iter_mut().take(2) {
            *slot = false;
        }

        let mut i = 2;
        while i * i < n {
            if mask[i] {
                // smaller multiples were already crossed out by smaller primes
                for multiple in (i * i..n).step_by(i) {
                    mask[multiple] = false;
                }
            }
            i += 1;
        }

        Self { mask }
    }

    /// Upper bound (exclusive) of the table
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// false for anything at or past the bound
    pub fn is_prime(&self, i: usize) -> bool {
        self.mask.get(i).copied().unwrap_or(false)
    }

    /// Primes below the bound, ascending
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &prime)| prime.then_some(i))
    }

    pub fn count(&self) -> usize {
        self.primes().count()
    }
}
