//! # 日历服务 Trait
//!
//! 公历转农历与八字排盘依赖外部日历库（节气、朔望表），本模块只定义接口。
//! 子时归属（23:00 是否换日）等约定完全由实现方决定。

use crate::types::{CalendarError, EightChar, LunarDate, SolarDate};

/// 日历服务提供者
pub trait CalendarProvider {
	/// 公历转农历
	fn solar_to_lunar(date: SolarDate) -> Result<LunarDate, CalendarError>;

	/// 按农历日期与时刻取八字四柱
	fn eight_char(date: LunarDate, hour: u8, minute: u8) -> Result<EightChar, CalendarError>;
}

/// 空实现：未接入日历服务
impl CalendarProvider for () {
	fn solar_to_lunar(_date: SolarDate) -> Result<LunarDate, CalendarError> {
		Err(CalendarError::Unavailable)
	}

	fn eight_char(_date: LunarDate, _hour: u8, _minute: u8) -> Result<EightChar, CalendarError> {
		Err(CalendarError::Unavailable)
	}
}
