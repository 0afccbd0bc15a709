use argminmax::ArgMinMax;

/// Equal-width partition of a closed price range into `n_chunks` bins
#[derive(serde::Deserialize, serde::Serialize, Default, Debug, Clone, PartialEq)]
pub struct RangeF64 {
    pub start_range: f64,
    pub end_range: f64,
    pub n_chunks: usize,
}

impl RangeF64 {
    pub fn new(start_range: f64, end_range: f64, n_chunks: usize) -> Self {
        debug_assert!(n_chunks > 0, "RangeF64 needs at least one chunk");
        RangeF64 {
            start_range,
            end_range,
            n_chunks,
        }
    }

    #[inline]
    pub fn n_chunks(&self) -> usize {
        self.n_chunks
    }

    pub fn min_max(&self) -> (f64, f64) {
        (self.start_range, self.end_range)
    }

    pub fn range_length(&self) -> f64 {
        self.end_range - self.start_range
    }

    pub fn chunk_size(&self) -> f64 {
        self.range_length() / (self.n_chunks as f64)
    }

    pub fn chunk_index(&self, value: f64) -> usize {
        let index = (value - self.start_range) / self.chunk_size();
        let chunk_index = index as usize;

        // Clamping handles floating-point inaccuracies at the boundary.
        chunk_index.min(self.n_chunks - 1)
    }

    pub fn chunk_lower_bound(&self, chunk_index: usize) -> f64 {
        debug_assert!(chunk_index < self.n_chunks);
        self.start_range + chunk_index as f64 * self.chunk_size()
    }

    pub fn chunk_center(&self, chunk_index: usize) -> f64 {
        self.chunk_lower_bound(chunk_index) + self.chunk_size() / 2.0
    }
}

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}
