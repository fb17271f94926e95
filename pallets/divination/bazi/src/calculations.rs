//! # 八字计算
//!
//! 五行、生肖、纳音、十神查表，以及从请求到命盘的完整推导流程。
//!
//! 除日历服务调用外均为纯函数，无状态、无副作用。

use alloc::string::String;

use crate::constants::{LOG_TARGET, NAYIN_TABLE, SHISHEN_TABLE};
use crate::interpretation::narrate;
use crate::traits::CalendarProvider;
use crate::types::*;

// ============================================================================
// 查表
// ============================================================================

/// 天干五行
pub fn wuxing_of_gan(gan: TianGan) -> WuXing {
	gan.to_wuxing()
}

/// 地支五行
pub fn wuxing_of_zhi(zhi: DiZhi) -> WuXing {
	zhi.to_wuxing()
}

/// 地支生肖
pub fn shengxiao_of(zhi: DiZhi) -> &'static str {
	zhi.shengxiao()
}

/// 计算纳音
///
/// 行 = 天干索引 / 2，列 = 地支索引 / 2。阴阳不配的干支（如"甲丑"）同样按表返回，
/// 不做拒绝：上游日历服务只会给出合法干支。
pub fn calculate_nayin(ganzhi: &GanZhi) -> NaYin {
	let stem_group = (ganzhi.gan.0 as usize % 10) / 2;
	let branch_slot = (ganzhi.zhi.0 as usize % 12) / 2;
	NAYIN_TABLE[stem_group][branch_slot]
}

/// 五行生克关系（`me` 为日主五行）
pub fn wuxing_relation(me: WuXing, other: WuXing) -> WuXingRelation {
	let i1 = me.index();
	let i2 = other.index();
	if i1 == i2 {
		WuXingRelation::TongWo
	} else if (i1 + 1) % 5 == i2 {
		WuXingRelation::WoSheng
	} else if (i2 + 1) % 5 == i1 {
		WuXingRelation::ShengWo
	} else if (i1 + 2) % 5 == i2 {
		WuXingRelation::WoKe
	} else {
		WuXingRelation::KeWo
	}
}

/// 计算十神
///
/// 以日主天干为"我"，先定五行关系，再按阴阳异同取表。
pub fn calculate_shishen(rizhu: TianGan, gan: TianGan) -> ShiShen {
	let relation = wuxing_relation(rizhu.to_wuxing(), gan.to_wuxing());
	let same_polarity = rizhu.0 % 2 == gan.0 % 2;
	SHISHEN_TABLE[relation.index()][if same_polarity { 0 } else { 1 }]
}

// ============================================================================
// 输入解析
// ============================================================================

/// 解析 1..=max_len 位十进制数字
fn parse_number(part: &str, max_len: usize) -> Option<u32> {
	if part.is_empty() || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	part.parse().ok()
}

/// 解析出生日期 `YYYY-MM-DD`（月、日可为一位数）
pub fn parse_birth_date(text: &[u8]) -> Result<BirthDate, CalendarError> {
	let text = core::str::from_utf8(text).map_err(|_| CalendarError::MalformedDate)?;
	let mut parts = text.trim().split('-');
	let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
	else {
		return Err(CalendarError::MalformedDate);
	};

	let year = parse_number(y, 4).filter(|&y| y > 0).ok_or(CalendarError::MalformedDate)?;
	let month = parse_number(m, 2).filter(|m| (1..=12).contains(m)).ok_or(CalendarError::MalformedDate)?;
	let day = parse_number(d, 2).filter(|d| (1..=31).contains(d)).ok_or(CalendarError::MalformedDate)?;

	Ok(BirthDate { year: year as u16, month: month as u8, day: day as u8 })
}

/// 解析出生时间 `HH:MM`（24 小时制）
pub fn parse_birth_time(text: &[u8]) -> Result<BirthTime, CalendarError> {
	let text = core::str::from_utf8(text).map_err(|_| CalendarError::MalformedTime)?;
	let mut parts = text.trim().split(':');
	let (Some(h), Some(m), None) = (parts.next(), parts.next(), parts.next()) else {
		return Err(CalendarError::MalformedTime);
	};

	let hour = parse_number(h, 2).filter(|&h| h <= 23).ok_or(CalendarError::MalformedTime)?;
	let minute = parse_number(m, 2).filter(|&m| m <= 59).ok_or(CalendarError::MalformedTime)?;

	Ok(BirthTime { hour: hour as u8, minute: minute as u8 })
}

/// 取必填文本字段，空文本视同缺失
fn required_text(field: Option<&[u8]>, which: RequiredField) -> Result<&[u8], AnalysisError> {
	field.filter(|s| !s.is_empty()).ok_or(AnalysisError::MissingField(which))
}

// ============================================================================
// 排盘
// ============================================================================

/// 解析日历服务返回的四柱文本
pub fn parse_pillars(eight_char: &EightChar) -> Result<[GanZhi; 4], AnalysisError> {
	let [year, month, day, hour] = eight_char.pillars();
	Ok([GanZhi::parse(year)?, GanZhi::parse(month)?, GanZhi::parse(day)?, GanZhi::parse(hour)?])
}

/// 由四柱构建命盘（五行、纳音、十神、生肖、命理摘要）
///
/// 十神以日柱天干为基准，日柱自身恒为比肩。
pub fn build_chart(
	name: String,
	gender: Gender,
	calendar_type: CalendarType,
	birth_date: BirthDate,
	birth_time: BirthTime,
	lunar_date: LunarDate,
	pillars: [GanZhi; 4],
) -> BaziChart {
	let rizhu = pillars[2].gan;

	let elements = pillars.map(|p| (wuxing_of_gan(p.gan), wuxing_of_zhi(p.zhi)));
	let zodiacs = pillars.map(|p| shengxiao_of(p.zhi));
	let nayin = pillars.map(|p| calculate_nayin(&p));
	let shishen = pillars.map(|p| calculate_shishen(rizhu, p.gan));

	log::debug!(
		target: LOG_TARGET,
		"纳音: {:?}, 十神: {:?} (日主 {})",
		nayin.map(NaYin::name),
		shishen.map(ShiShen::name),
		rizhu.to_char(),
	);

	let narrative = narrate(&pillars, gender);

	BaziChart {
		name,
		gender,
		calendar_type,
		birth_date,
		birth_time,
		lunar_date,
		pillars,
		elements,
		nayin,
		shishen,
		zodiacs,
		narrative,
	}
}

/// 计算八字命盘
///
/// # 处理流程
///
/// 1. 校验必填字段（出生日期、出生时间、性别、日历类型），缺失即返回，不调用日历服务
/// 2. 解析日期 `YYYY-MM-DD` 与时间 `HH:MM`
/// 3. 公历先转农历，再按农历日期与时刻取八字；农历直接取八字
/// 4. 解析四柱并构建命盘
///
/// 日历服务的错误原样返回，不重试、不替换默认值。
pub fn compute_chart<C: CalendarProvider>(request: &BaziRequest) -> Result<BaziChart, AnalysisError> {
	// 1. 必填字段
	let date_text = required_text(request.birth_date.as_ref().map(|d| d.as_slice()), RequiredField::BirthDate)?;
	let time_text = required_text(request.birth_time.as_ref().map(|t| t.as_slice()), RequiredField::BirthTime)?;
	let gender = request.gender.ok_or(AnalysisError::MissingField(RequiredField::Gender))?;
	let calendar_type = request
		.calendar_type
		.ok_or(AnalysisError::MissingField(RequiredField::CalendarType))?;

	// 2. 解析日期时间
	let birth_date = parse_birth_date(date_text)?;
	let birth_time = parse_birth_time(time_text)?;

	log::debug!(
		target: LOG_TARGET,
		"输入参数: {:?} {:?} {:?}",
		calendar_type,
		birth_date,
		birth_time,
	);

	// 3. 日历服务
	let lunar_date = match calendar_type {
		CalendarType::Solar => C::solar_to_lunar(SolarDate {
			year: birth_date.year,
			month: birth_date.month,
			day: birth_date.day,
		})?,
		CalendarType::Lunar => LunarDate {
			year: birth_date.year,
			month: birth_date.month,
			day: birth_date.day,
			is_leap_month: request.is_leap_month,
		},
	};
	let eight_char = C::eight_char(lunar_date, birth_time.hour, birth_time.minute)?;

	// 4. 四柱
	let pillars = parse_pillars(&eight_char)?;

	log::debug!(
		target: LOG_TARGET,
		"八字四柱: {} {} {} {}",
		pillars[0],
		pillars[1],
		pillars[2],
		pillars[3],
	);

	let name = String::from_utf8_lossy(&request.name).into_owned();

	Ok(build_chart(name, gender, calendar_type, birth_date, birth_time, lunar_date, pillars))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mock::{calendar_calls, request, MockCalendar};

	// TianGan: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
	const JIA: TianGan = TianGan(0);
	const BING: TianGan = TianGan(2);
	const GUI: TianGan = TianGan(9);

	/// 六十甲子纳音（两两一组，按序）
	const CANONICAL_NAYIN: [&str; 30] = [
		"海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火",
		"涧下水", "城头土", "白蜡金", "杨柳木", "泉中水", "屋上土",
		"霹雳火", "松柏木", "长流水", "砂中金", "山下火", "平地木",
		"壁上土", "金箔金", "覆灯火", "天河水", "大驿土", "钗钏金",
		"桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
	];

	fn gz(text: &str) -> GanZhi {
		GanZhi::parse(text).unwrap()
	}

	#[test]
	fn stem_elements() {
		let expected = "木木火火土土金金水水";
		for (i, c) in expected.chars().enumerate() {
			assert_eq!(wuxing_of_gan(TianGan(i as u8)).to_char(), c);
		}
	}

	#[test]
	fn branch_elements() {
		let expected = "水土木木土火火土金金土水";
		for (i, c) in expected.chars().enumerate() {
			assert_eq!(wuxing_of_zhi(DiZhi(i as u8)).to_char(), c);
		}
	}

	#[test]
	fn zodiac_follows_branch() {
		assert_eq!(shengxiao_of(DiZhi(0)), "鼠");
		assert_eq!(shengxiao_of(DiZhi(4)), "龙");
		assert_eq!(shengxiao_of(DiZhi(11)), "猪");
	}

	#[test]
	fn nayin_matches_sixty_jiazi() {
		for i in 0..60u8 {
			let ganzhi = GanZhi::from_index(i).unwrap();
			assert_eq!(
				calculate_nayin(&ganzhi).name(),
				CANONICAL_NAYIN[i as usize / 2],
				"{}",
				ganzhi
			);
		}
	}

	#[test]
	fn nayin_spot_checks() {
		assert_eq!(calculate_nayin(&gz("甲子")), NaYin::HaiZhongJin);
		assert_eq!(calculate_nayin(&gz("丙寅")), NaYin::LuZhongHuo);
		assert_eq!(calculate_nayin(&gz("戊辰")), NaYin::DaLinMu);
		assert_eq!(calculate_nayin(&gz("癸亥")), NaYin::DaHaiShui);
	}

	#[test]
	fn nayin_element_is_last_char_of_name() {
		for row in NAYIN_TABLE.iter() {
			for nayin in row.iter() {
				assert_eq!(nayin.name().chars().last(), Some(nayin.wuxing().to_char()));
			}
		}
	}

	#[test]
	fn nayin_mismatched_parity_is_looked_up_not_rejected() {
		// 甲丑 不是合法干支，仍落在 [0][0]
		let odd = GanZhi { gan: JIA, zhi: DiZhi(1) };
		assert!(!odd.is_valid());
		assert_eq!(calculate_nayin(&odd), NaYin::HaiZhongJin);
	}

	#[test]
	fn shishen_of_self_is_bijian() {
		for g in 0..10u8 {
			assert_eq!(calculate_shishen(TianGan(g), TianGan(g)), ShiShen::BiJian);
		}
	}

	#[test]
	fn shishen_for_jia_day_master() {
		let expected = [
			ShiShen::BiJian,
			ShiShen::JieCai,
			ShiShen::ShiShen,
			ShiShen::ShangGuan,
			ShiShen::PianCai,
			ShiShen::ZhengCai,
			ShiShen::QiSha,
			ShiShen::ZhengGuan,
			ShiShen::PianYin,
			ShiShen::ZhengYin,
		];
		for (g, shishen) in expected.iter().enumerate() {
			assert_eq!(calculate_shishen(JIA, TianGan(g as u8)), *shishen);
		}
	}

	#[test]
	fn shishen_polarity_split() {
		// 丙火 见 癸水：水克火，阴阳相异 → 正官
		assert_eq!(calculate_shishen(BING, GUI), ShiShen::ZhengGuan);
		// 癸水 见 丙火：水克火，阴阳相异 → 正财
		assert_eq!(calculate_shishen(GUI, BING), ShiShen::ZhengCai);
	}

	#[test]
	fn relation_flips_when_swapped() {
		for a in WuXing::ALL {
			for b in WuXing::ALL {
				assert_eq!(wuxing_relation(b, a), wuxing_relation(a, b).reversed());
			}
		}
	}

	#[test]
	fn relation_matches_generation_and_domination() {
		for w in WuXing::ALL {
			assert_eq!(wuxing_relation(w, w.generates()), WuXingRelation::WoSheng);
			assert_eq!(wuxing_relation(w, w.dominates()), WuXingRelation::WoKe);
			assert_eq!(wuxing_relation(w.generates(), w), WuXingRelation::ShengWo);
			assert_eq!(wuxing_relation(w.dominates(), w), WuXingRelation::KeWo);
		}
	}

	#[test]
	fn parse_date_accepts_form_input() {
		assert_eq!(
			parse_birth_date(b"1990-01-01"),
			Ok(BirthDate { year: 1990, month: 1, day: 1 })
		);
		assert_eq!(parse_birth_date(b"1990-1-5"), Ok(BirthDate { year: 1990, month: 1, day: 5 }));
	}

	#[test]
	fn parse_date_rejects_malformed() {
		let cases: [&[u8]; 6] = [
			b"1990/01/01",
			b"1990-13-01",
			b"1990-01-32",
			b"1990-01",
			b"abcd-01-01",
			b"1990-01-01-01",
		];
		for text in cases {
			assert_eq!(parse_birth_date(text), Err(CalendarError::MalformedDate));
		}
	}

	#[test]
	fn parse_time_bounds() {
		assert_eq!(parse_birth_time(b"08:00"), Ok(BirthTime { hour: 8, minute: 0 }));
		assert_eq!(parse_birth_time(b"23:59"), Ok(BirthTime { hour: 23, minute: 59 }));
		assert_eq!(parse_birth_time(b"24:00"), Err(CalendarError::MalformedTime));
		assert_eq!(parse_birth_time(b"08:60"), Err(CalendarError::MalformedTime));
		assert_eq!(parse_birth_time(b"0800"), Err(CalendarError::MalformedTime));
	}

	#[test]
	fn compute_chart_solar() {
		let chart = compute_chart::<MockCalendar>(&request(
			"张三",
			Some(CalendarType::Solar),
			Some("1990-01-01"),
			Some("08:00"),
			Some(Gender::Male),
		))
		.unwrap();

		assert_eq!(chart.pillars, [gz("己巳"), gz("丙子"), gz("丙寅"), gz("壬辰")]);
		assert_eq!(chart.lunar_date, LunarDate { year: 1989, month: 12, day: 5, is_leap_month: false });
		assert_eq!(
			chart.shishen,
			[ShiShen::ShangGuan, ShiShen::BiJian, ShiShen::BiJian, ShiShen::QiSha]
		);
		assert_eq!(
			chart.nayin,
			[NaYin::DaLinMu, NaYin::JianXiaShui, NaYin::LuZhongHuo, NaYin::ChangLiuShui]
		);
		assert_eq!(chart.zodiacs, ["蛇", "鼠", "虎", "龙"]);
		assert_eq!(chart.day_master(), BING);
		assert_eq!(calendar_calls(), 2);
	}

	#[test]
	fn lunar_input_skips_conversion() {
		let solar = compute_chart::<MockCalendar>(&request(
			"",
			Some(CalendarType::Solar),
			Some("1990-01-01"),
			Some("08:00"),
			Some(Gender::Female),
		))
		.unwrap();
		let calls_after_solar = calendar_calls();

		let lunar = compute_chart::<MockCalendar>(&request(
			"",
			Some(CalendarType::Lunar),
			Some("1989-12-05"),
			Some("08:00"),
			Some(Gender::Female),
		))
		.unwrap();

		assert_eq!(solar.pillars, lunar.pillars);
		assert_eq!(calendar_calls() - calls_after_solar, 1);
	}

	#[test]
	fn missing_fields_fail_before_delegation() {
		let cases = [
			(request("张三", Some(CalendarType::Solar), None, Some("08:00"), Some(Gender::Male)), RequiredField::BirthDate),
			(request("张三", Some(CalendarType::Solar), Some("1990-01-01"), None, Some(Gender::Male)), RequiredField::BirthTime),
			(request("张三", Some(CalendarType::Solar), Some("1990-01-01"), Some(""), Some(Gender::Male)), RequiredField::BirthTime),
			(request("张三", Some(CalendarType::Solar), Some("1990-01-01"), Some("08:00"), None), RequiredField::Gender),
			(request("张三", None, Some("1990-01-01"), Some("08:00"), Some(Gender::Male)), RequiredField::CalendarType),
		];
		for (req, field) in cases {
			assert_eq!(compute_chart::<MockCalendar>(&req), Err(AnalysisError::MissingField(field)));
		}
		assert_eq!(calendar_calls(), 0);
	}

	#[test]
	fn malformed_date_fails_before_delegation() {
		let req = request("", Some(CalendarType::Solar), Some("1990-1"), Some("08:00"), Some(Gender::Male));
		assert_eq!(
			compute_chart::<MockCalendar>(&req),
			Err(AnalysisError::Calendar(CalendarError::MalformedDate))
		);
		assert_eq!(calendar_calls(), 0);
	}

	#[test]
	fn calendar_errors_propagate() {
		let req = request("", Some(CalendarType::Solar), Some("2023-02-30"), Some("08:00"), Some(Gender::Male));
		assert_eq!(
			compute_chart::<MockCalendar>(&req),
			Err(AnalysisError::Calendar(CalendarError::InvalidSolarDate))
		);

		let mut req = request("", Some(CalendarType::Lunar), Some("1989-12-05"), Some("08:00"), Some(Gender::Male));
		req.is_leap_month = true;
		assert_eq!(
			compute_chart::<MockCalendar>(&req),
			Err(AnalysisError::Calendar(CalendarError::InvalidLunarDate))
		);
	}

	#[test]
	fn unconfigured_calendar_is_unavailable() {
		let req = request("", Some(CalendarType::Lunar), Some("1989-12-05"), Some("08:00"), Some(Gender::Male));
		assert_eq!(
			compute_chart::<()>(&req),
			Err(AnalysisError::Calendar(CalendarError::Unavailable))
		);
	}

	#[test]
	fn invalid_symbol_from_calendar() {
		let req = request("", Some(CalendarType::Lunar), Some("2001-01-01"), Some("12:00"), Some(Gender::Male));
		assert_eq!(
			compute_chart::<MockCalendar>(&req),
			Err(AnalysisError::InvalidSymbol(SymbolKind::DiZhi))
		);
	}

	#[test]
	fn pillar_text_must_be_two_symbols() {
		assert_eq!(GanZhi::parse("甲"), Err(AnalysisError::InvalidSymbol(SymbolKind::GanZhi)));
		assert_eq!(GanZhi::parse("甲子丑"), Err(AnalysisError::InvalidSymbol(SymbolKind::GanZhi)));
		assert_eq!(GanZhi::parse("子甲"), Err(AnalysisError::InvalidSymbol(SymbolKind::TianGan)));
	}

	#[test]
	fn compute_chart_is_idempotent() {
		let req = request("张三", Some(CalendarType::Solar), Some("1990-01-01"), Some("08:00"), Some(Gender::Male));
		let first = compute_chart::<MockCalendar>(&req).unwrap().report();
		let second = compute_chart::<MockCalendar>(&req).unwrap().report();
		assert_eq!(first.analysis, second.analysis);
	}
}
