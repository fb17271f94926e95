//! # 测试模拟环境
//!
//! 为单元测试提供模拟的运行时环境和日历服务

use crate as pallet_bazi_analysis;
use crate::traits::CalendarProvider;
use crate::types::*;
use core::cell::Cell;
use frame_support::derive_impl;
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

thread_local! {
	static CALENDAR_CALLS: Cell<u32> = const { Cell::new(0) };
}

/// 当前线程内日历服务被调用的次数
pub fn calendar_calls() -> u32 {
	CALENDAR_CALLS.with(|c| c.get())
}

fn record_call() {
	CALENDAR_CALLS.with(|c| c.set(c.get() + 1));
}

fn eight_char(year: &str, month: &str, day: &str, hour: &str) -> EightChar {
	EightChar { year: year.into(), month: month.into(), day: day.into(), hour: hour.into() }
}

/// Mock 日历服务
///
/// - 公历 1990-01-01 → 农历 1989 年腊月初五（非闰月）
/// - 农历 1989-12-05 辰时 → 己巳 丙子 丙寅 壬辰
/// - 农历 2001-01-01 → 时柱含非法地支，用于测试符号校验
/// - 其他日期一律视为不存在
pub struct MockCalendar;

impl CalendarProvider for MockCalendar {
	fn solar_to_lunar(date: SolarDate) -> Result<LunarDate, CalendarError> {
		record_call();
		match (date.year, date.month, date.day) {
			(1990, 1, 1) => Ok(LunarDate { year: 1989, month: 12, day: 5, is_leap_month: false }),
			_ => Err(CalendarError::InvalidSolarDate),
		}
	}

	fn eight_char(date: LunarDate, hour: u8, _minute: u8) -> Result<EightChar, CalendarError> {
		record_call();
		match (date.year, date.month, date.day, date.is_leap_month, hour) {
			(1989, 12, 5, false, 7..=8) => Ok(eight_char("己巳", "丙子", "丙寅", "壬辰")),
			(2001, 1, 1, false, _) => Ok(eight_char("甲子", "乙丑", "丙寅", "丁Q")),
			_ => Err(CalendarError::InvalidLunarDate),
		}
	}
}

// 配置测试运行时
frame_support::construct_runtime!(
	pub enum Test
	{
		System: frame_system,
		BaziAnalysis: pallet_bazi_analysis,
	}
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type Block = Block;
}

impl pallet_bazi_analysis::Config for Test {
	type WeightInfo = ();
	type Calendar = MockCalendar;
}

/// 构造分析请求
pub fn request(
	name: &str,
	calendar_type: Option<CalendarType>,
	birth_date: Option<&str>,
	birth_time: Option<&str>,
	gender: Option<Gender>,
) -> BaziRequest {
	BaziRequest {
		name: name.as_bytes().to_vec().try_into().unwrap(),
		calendar_type,
		birth_date: birth_date.map(|d| d.as_bytes().to_vec().try_into().unwrap()),
		birth_time: birth_time.map(|t| t.as_bytes().to_vec().try_into().unwrap()),
		gender,
		is_leap_month: false,
	}
}

// 构建测试用的存储
pub fn new_test_ext() -> sp_io::TestExternalities {
	let t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

	let mut ext = sp_io::TestExternalities::new(t);
	ext.execute_with(|| System::set_block_number(1));
	ext
}
