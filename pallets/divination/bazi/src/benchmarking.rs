//! # Bazi Analysis Pallet Benchmarking
//!
//! 八字分析模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame_benchmarking::v2::*;
use frame_support::BoundedVec;
use frame_system::RawOrigin;
use pallet::*;

fn bounded<const N: u32>(text: &str) -> BoundedVec<u8, frame_support::traits::ConstU32<N>> {
	BoundedVec::truncate_from(text.as_bytes().to_vec())
}

#[benchmarks]
mod benchmarks {
	use super::*;

	#[benchmark]
	fn analyze_bazi() {
		let caller: T::AccountId = whitelisted_caller();
		let request = BaziRequest {
			name: bounded::<MAX_NAME_LEN>("张三"),
			calendar_type: Some(CalendarType::Solar),
			birth_date: Some(bounded::<MAX_DATE_LEN>("1990-01-01")),
			birth_time: Some(bounded::<MAX_TIME_LEN>("08:00")),
			gender: Some(Gender::Male),
			is_leap_month: false,
		};

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), request);
	}

	impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
