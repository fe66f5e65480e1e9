use std::hash::{BuildHasher, Hasher};

/// A deliberately weak hasher that sums the bytes written to it, so that tests can predict which
/// keys collide. For strings this is the byte sum plus the `0xff` terminator written by
/// [`str`]'s [`Hash`](std::hash::Hash) impl, e.g. `"cosi11"` and `"<A"` share a bucket modulo 13.
#[derive(Debug, Default)]
pub struct ByteSumHasher {
    state: u64,
}

impl Hasher for ByteSumHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_add(*byte as u64);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ByteSumBuildHasher;

impl BuildHasher for ByteSumBuildHasher {
    type Hasher = ByteSumHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ByteSumHasher::default()
    }
}

/// Hashes every value to the same constant, forcing a single chain.
#[derive(Debug, Default)]
pub struct ConstantHasher;

impl Hasher for ConstantHasher {
    fn finish(&self) -> u64 {
        7
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantBuildHasher;

impl BuildHasher for ConstantBuildHasher {
    type Hasher = ConstantHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ConstantHasher
    }
}
