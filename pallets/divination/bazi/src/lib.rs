//! # 八字分析 Pallet (Pallet Bazi Analysis)
//!
//! ## 概述
//!
//! 本 Pallet 根据出生信息生成八字分析：
//! - 四柱排盘（委托日历服务完成公历转农历与取八字）
//! - 四柱五行、纳音五行
//! - 十神关系（以日主为基准）
//! - 生肖
//! - 日主强弱与年柱、月柱性格的简要命理摘要
//!
//! 节气、朔望等天文历法计算不在本 Pallet 内实现，由 `Config::Calendar`
//! 提供（见 [`traits::CalendarProvider`]）。
//!
//! ## 使用示例
//!
//! ```ignore
//! // 链上调用：计算并发出事件，不存储
//! BaziAnalysis::analyze_bazi(origin, request)?;
//!
//! // Runtime API / RPC：临时排盘，返回带标签的分析文本
//! let report = BaziAnalysis::analyze(&request)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod types;
pub mod constants;
pub mod calculations;
pub mod interpretation;
pub mod traits;

// 重新导出核心类型
pub use traits::CalendarProvider;
pub use types::{AnalysisError, BaziChart, BaziReport, BaziRequest, CalendarError};

#[frame_support::pallet]
pub mod pallet {
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	use crate::constants::LOG_TARGET;
	use crate::traits::CalendarProvider;
	use crate::weights::WeightInfo;

	pub use crate::types::*;

	/// Pallet 配置 Trait
	#[pallet::config]
	pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
		/// 权重信息
		type WeightInfo: WeightInfo;

		/// 日历服务（公历转农历、取八字）
		type Calendar: CalendarProvider;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	/// Pallet 事件
	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// 八字分析完成 [调用者, 四柱, 日主]
		BaziAnalyzed {
			who: T::AccountId,
			pillars: [GanZhi; 4],
			day_master: TianGan,
		},
	}

	/// Pallet 错误
	#[pallet::error]
	pub enum Error<T> {
		/// 缺少日历类型
		MissingCalendarType,
		/// 缺少出生日期
		MissingBirthDate,
		/// 缺少出生时间
		MissingBirthTime,
		/// 缺少性别
		MissingGender,
		/// 无效的天干
		InvalidTianGan,
		/// 无效的地支
		InvalidDiZhi,
		/// 无效的干支（不是两个字符）
		InvalidGanZhi,
		/// 出生日期格式错误
		MalformedBirthDate,
		/// 出生时间格式错误
		MalformedBirthTime,
		/// 公历日期不存在
		InvalidSolarDate,
		/// 农历日期不存在
		InvalidLunarDate,
		/// 日历服务不可用
		CalendarUnavailable,
	}

	impl<T> From<AnalysisError> for Error<T> {
		fn from(e: AnalysisError) -> Self {
			match e {
				AnalysisError::MissingField(field) => match field {
					RequiredField::CalendarType => Error::MissingCalendarType,
					RequiredField::BirthDate => Error::MissingBirthDate,
					RequiredField::BirthTime => Error::MissingBirthTime,
					RequiredField::Gender => Error::MissingGender,
				},
				AnalysisError::InvalidSymbol(kind) => match kind {
					SymbolKind::TianGan => Error::InvalidTianGan,
					SymbolKind::DiZhi => Error::InvalidDiZhi,
					SymbolKind::GanZhi => Error::InvalidGanZhi,
				},
				AnalysisError::Calendar(e) => match e {
					CalendarError::MalformedDate => Error::MalformedBirthDate,
					CalendarError::MalformedTime => Error::MalformedBirthTime,
					CalendarError::InvalidSolarDate => Error::InvalidSolarDate,
					CalendarError::InvalidLunarDate => Error::InvalidLunarDate,
					CalendarError::Unavailable => Error::CalendarUnavailable,
				},
			}
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// 八字分析
		///
		/// # 处理流程
		///
		/// 1. 校验必填字段与日期时间格式
		/// 2. 公历经日历服务转为农历，再取四柱；农历直接取四柱
		/// 3. 计算五行、纳音、十神、生肖与命理摘要
		/// 4. 触发事件
		///
		/// # 参数
		///
		/// - `origin`: 交易发起者
		/// - `request`: 姓名（可为空）、日历类型、`YYYY-MM-DD`、`HH:MM`、性别
		///
		/// # 注意
		///
		/// 结果不存储。需要完整分析文本时使用 [`Pallet::analyze`]。
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::analyze_bazi())]
		pub fn analyze_bazi(origin: OriginFor<T>, request: BaziRequest) -> DispatchResult {
			let who = ensure_signed(origin)?;

			let chart = Self::compute_chart(&request)?;

			log::info!(
				target: LOG_TARGET,
				"八字分析完成: {} {} {} {}",
				chart.pillars[0],
				chart.pillars[1],
				chart.pillars[2],
				chart.pillars[3],
			);

			Self::deposit_event(Event::BaziAnalyzed {
				who,
				pillars: chart.pillars,
				day_master: chart.day_master(),
			});

			Ok(())
		}
	}

	// 辅助函数
	impl<T: Config> Pallet<T> {
		/// 临时排盘（不存储）
		///
		/// 使用 `T::Calendar` 计算命盘，失败时记录警告日志并转换为 Pallet 错误。
		pub fn compute_chart(request: &BaziRequest) -> Result<BaziChart, Error<T>> {
			crate::calculations::compute_chart::<T::Calendar>(request).map_err(|e| {
				log::warn!(target: LOG_TARGET, "八字分析失败: {:?}", e);
				Error::<T>::from(e)
			})
		}

		/// 临时排盘并生成对外报告（供 Runtime API / RPC 使用）
		pub fn analyze(request: &BaziRequest) -> Result<BaziReport, Error<T>> {
			Self::compute_chart(request).map(|chart| chart.report())
		}
	}
}
