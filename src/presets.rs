//! 입력 폼에 노출되는 고정 프리셋 값.

/// 바이알 총량 프리셋 [mg]
pub const VIAL_MG_OPTIONS: [f64; 7] = [5.0, 10.0, 15.0, 20.0, 30.0, 500.0, 1000.0];

/// 희석액 부피 프리셋 [mL]
pub const WATER_ML_OPTIONS: [f64; 5] = [1.0, 2.0, 3.0, 5.0, 10.0];

/// 빠른 투여량 선택 프리셋 [mg]
pub const DOSE_MG_OPTIONS: [f64; 10] = [0.1, 0.2, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0];
