//! # 命理摘要与分析文本
//!
//! - 日主强弱（简化判断：阳干男命偏强、女命偏弱，阴干反之）
//! - 年柱、月柱地支性格描述
//! - 带标签的多行分析文本（`八字：`、`五行：`、`纳音：`、`十神：`、`生肖：` 等）
//!
//! 前端按行查找这些中文标签解析结果，标签与行序不可更改。

use alloc::{
	format,
	string::{String, ToString},
};

use crate::constants::DIZHI_TRAITS;
use crate::types::{BaziChart, BaziReport, DiZhi, GanZhi, Gender, TianGan, WuXing};

/// 日主强弱
pub fn day_master_strength(rizhu: TianGan, gender: Gender) -> &'static str {
	match (rizhu.is_yang(), gender) {
		(true, Gender::Male) | (false, Gender::Female) => "偏强",
		(true, Gender::Female) | (false, Gender::Male) => "偏弱",
	}
}

/// 地支性格描述
pub fn fortune_desc(zhi: DiZhi) -> &'static str {
	DIZHI_TRAITS[zhi.0 as usize % 12]
}

/// 生成命理摘要（两行）
///
/// ```text
/// 日主丙火，偏强
/// 年柱己巳(土火)主灵活多变 月柱丙子主聪明智慧
/// ```
pub fn narrate(pillars: &[GanZhi; 4], gender: Gender) -> String {
	let [year, month, day, _] = pillars;
	let rizhu = day.gan;

	format!(
		"日主{}{}，{}\n年柱{}({}{})主{} 月柱{}主{}",
		rizhu.to_char(),
		rizhu.to_wuxing().to_char(),
		day_master_strength(rizhu, gender),
		year,
		year.gan.to_wuxing().to_char(),
		year.zhi.to_wuxing().to_char(),
		fortune_desc(year.zhi),
		month,
		fortune_desc(month.zhi),
	)
}

/// 八字八个字的五行计数，按 木火土金水 排列
pub fn wuxing_counts(pillars: &[GanZhi; 4]) -> [u8; 5] {
	let mut counts = [0u8; 5];
	for p in pillars.iter() {
		counts[p.gan.to_wuxing().index() as usize] += 1;
		counts[p.zhi.to_wuxing().index() as usize] += 1;
	}
	counts
}

fn join<I, S>(items: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut out = String::new();
	for (i, item) in items.into_iter().enumerate() {
		if i > 0 {
			out.push(' ');
		}
		out.push_str(item.as_ref());
	}
	out
}

fn element_pair(pair: &(WuXing, WuXing)) -> String {
	let mut s = String::new();
	s.push(pair.0.to_char());
	s.push(pair.1.to_char());
	s
}

/// 生成带标签的分析文本
///
/// ```text
/// 姓名：张三
/// 男命
/// 出生阳历：1990-01-01 08:00
/// 八字：己巳 丙子 丙寅 壬辰
/// 五行：土火 火水 火木 水土
/// 纳音：大林木 涧下水 炉中火 长流水
/// 十神：伤官 比肩 比肩 七杀
/// 生肖：蛇 鼠 虎 龙
/// 五行统计：木1 火3 土2 金0 水2
/// 日主丙火，偏强
/// 年柱己巳(土火)主灵活多变 月柱丙子主聪明智慧
/// ```
///
/// 姓名为空时省略第一行。
pub fn format_analysis(chart: &BaziChart) -> String {
	let mut text = String::new();

	if !chart.name.is_empty() {
		text.push_str(&format!("姓名：{}\n", chart.name));
	}
	text.push_str(&format!("{}命\n", chart.gender.label()));
	text.push_str(&format!(
		"出生{}：{:04}-{:02}-{:02} {:02}:{:02}\n",
		chart.calendar_type.label(),
		chart.birth_date.year,
		chart.birth_date.month,
		chart.birth_date.day,
		chart.birth_time.hour,
		chart.birth_time.minute,
	));
	text.push_str(&format!("八字：{}\n", join(chart.pillars.iter().map(|p| p.to_string()))));
	text.push_str(&format!("五行：{}\n", join(chart.elements.iter().map(element_pair))));
	text.push_str(&format!("纳音：{}\n", join(chart.nayin.iter().map(|n| n.name()))));
	text.push_str(&format!("十神：{}\n", join(chart.shishen.iter().map(|s| s.name()))));
	text.push_str(&format!("生肖：{}\n", join(chart.zodiacs.iter())));

	let counts = wuxing_counts(&chart.pillars);
	let stats = WuXing::ALL
		.iter()
		.zip(counts.iter())
		.map(|(w, n)| format!("{}{}", w.to_char(), n));
	text.push_str(&format!("五行统计：{}\n", join(stats)));

	text.push_str(&chart.narrative);
	text
}

/// 构建对外报告
pub fn build_report(chart: &BaziChart) -> BaziReport {
	BaziReport {
		pillars: chart.pillars.map(|p| p.to_string()),
		elements: chart.elements.map(|pair| element_pair(&pair)),
		zodiacs: chart.zodiacs.map(|z| z.to_string()),
		analysis: format_analysis(chart),
	}
}
