//! # Bazi Analysis Pallet Weights
//!
//! 八字分析模块权重定义（纯计算，无存储读写）

use frame_support::weights::Weight;

/// 权重信息 Trait
pub trait WeightInfo {
	fn analyze_bazi() -> Weight;
}

/// Substrate 权重实现
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn analyze_bazi() -> Weight {
		Weight::from_parts(45_000_000, 0)
	}
}

/// 默认权重实现（用于测试）
impl WeightInfo for () {
	fn analyze_bazi() -> Weight { Weight::from_parts(45_000_000, 0) }
}
