//! Analysis and computation configuration

/// Settings for swing-point detection (smoothing + extrema scan)
pub struct SwingSettings {
    // Rolling-mean window applied to the high/low columns before scanning
    pub smoothing_window: usize,
    // Symmetric comparison order: a bar must beat this many neighbours on each side
    pub extrema_order: usize,
}

/// Settings for the Fibonacci retracement generator
pub struct FibonacciSettings {
    // How many recent swing high/low pairs to retrace
    pub swing_pairs: usize,
}

/// Settings for the volume-by-price generator
pub struct VolumeSettings {
    pub bin_count: usize,
    // Number of highest-volume bins promoted to levels
    pub cluster_count: usize,
}

pub struct PsychologicalSettings {
    // Half-width of the "nearby" window around the current price (percent)
    pub nearby_pct: f64,
}

pub struct PriceActionSettings {
    // Lookback window for pivot support/resistance
    pub window: usize,
}

pub struct GroupingSettings {
    // Relative distance under which adjacent sorted levels merge into one group
    pub threshold: f64,
}

pub struct MovingAverageSettings {
    pub periods: &'static [usize],
}

pub struct VolatilitySettings {
    // Moving-average window the secondary index is compared against
    pub ma_period: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub swing: SwingSettings,
    pub fibonacci: FibonacciSettings,
    pub volume: VolumeSettings,
    pub psychological: PsychologicalSettings,
    pub price_action: PriceActionSettings,
    pub grouping: GroupingSettings,
    pub moving_averages: MovingAverageSettings,
    pub volatility: VolatilitySettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    swing: SwingSettings {
        smoothing_window: 3,
        extrema_order: 20,
    },

    fibonacci: FibonacciSettings { swing_pairs: 3 },

    volume: VolumeSettings {
        bin_count: 100,
        cluster_count: 10,
    },

    psychological: PsychologicalSettings { nearby_pct: 2.0 },

    price_action: PriceActionSettings { window: 20 },

    grouping: GroupingSettings { threshold: 0.002 },

    moving_averages: MovingAverageSettings {
        periods: &[50, 200],
    },

    volatility: VolatilitySettings { ma_period: 20 },
};
