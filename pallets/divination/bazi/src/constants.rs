//! # 八字常量表
//!
//! 天干、地支、五行、生肖、纳音、十神等固定对照表。
//!
//! 所有表格均为只读常量，索引顺序固定，不得重排：
//!
//! - 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! - 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)
//! - 五行: 木(0) 火(1) 土(2) 金(3) 水(4)，按相生顺序排列

use crate::types::{NaYin, ShiShen, WuXing};

/// 天干字符表
pub const TIANGAN: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

/// 地支字符表
pub const DIZHI: [char; 12] = ['子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥'];

/// 五行字符表（相生顺序：木生火、火生土、土生金、金生水、水生木）
pub const WUXING: [char; 5] = ['木', '火', '土', '金', '水'];

/// 十二生肖（按地支顺序）
pub const SHENGXIAO: [&str; 12] = ["鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪"];

/// 天干五行
///
/// 甲乙木、丙丁火、戊己土、庚辛金、壬癸水
pub const TIANGAN_WUXING: [WuXing; 10] = [
	WuXing::Mu,   // 甲
	WuXing::Mu,   // 乙
	WuXing::Huo,  // 丙
	WuXing::Huo,  // 丁
	WuXing::Tu,   // 戊
	WuXing::Tu,   // 己
	WuXing::Jin,  // 庚
	WuXing::Jin,  // 辛
	WuXing::Shui, // 壬
	WuXing::Shui, // 癸
];

/// 地支五行
///
/// 寅卯木、巳午火、辰戌丑未土、申酉金、亥子水
pub const DIZHI_WUXING: [WuXing; 12] = [
	WuXing::Shui, // 子
	WuXing::Tu,   // 丑
	WuXing::Mu,   // 寅
	WuXing::Mu,   // 卯
	WuXing::Tu,   // 辰
	WuXing::Huo,  // 巳
	WuXing::Huo,  // 午
	WuXing::Tu,   // 未
	WuXing::Jin,  // 申
	WuXing::Jin,  // 酉
	WuXing::Tu,   // 戌
	WuXing::Shui, // 亥
];

/// 纳音五行表
///
/// 行：天干组（甲乙、丙丁、戊己、庚辛、壬癸），即 `天干索引 / 2`
/// 列：地支组（子丑、寅卯、辰巳、午未、申酉、戌亥），即 `地支索引 / 2`
///
/// 例：甲子、乙丑 → [0][0] 海中金；丙寅、丁卯 → [1][1] 炉中火
pub const NAYIN_TABLE: [[NaYin; 6]; 5] = [
	// 甲乙
	[
		NaYin::HaiZhongJin,  // 甲子 乙丑
		NaYin::DaXiShui,     // 甲寅 乙卯
		NaYin::FuDengHuo,    // 甲辰 乙巳
		NaYin::ShaZhongJin,  // 甲午 乙未
		NaYin::QuanZhongShui, // 甲申 乙酉
		NaYin::ShanTouHuo,   // 甲戌 乙亥
	],
	// 丙丁
	[
		NaYin::JianXiaShui,  // 丙子 丁丑
		NaYin::LuZhongHuo,   // 丙寅 丁卯
		NaYin::ShaZhongTu,   // 丙辰 丁巳
		NaYin::TianHeShui,   // 丙午 丁未
		NaYin::ShanXiaHuo,   // 丙申 丁酉
		NaYin::WuShangTu,    // 丙戌 丁亥
	],
	// 戊己
	[
		NaYin::PiLiHuo,      // 戊子 己丑
		NaYin::ChengTouTu,   // 戊寅 己卯
		NaYin::DaLinMu,      // 戊辰 己巳
		NaYin::TianShangHuo, // 戊午 己未
		NaYin::DaYiTu,       // 戊申 己酉
		NaYin::PingDiMu,     // 戊戌 己亥
	],
	// 庚辛
	[
		NaYin::BiShangTu,    // 庚子 辛丑
		NaYin::SongBaiMu,    // 庚寅 辛卯
		NaYin::BaiLaJin,     // 庚辰 辛巳
		NaYin::LuPangTu,     // 庚午 辛未
		NaYin::ShiLiuMu,     // 庚申 辛酉
		NaYin::ChaChuanJin,  // 庚戌 辛亥
	],
	// 壬癸
	[
		NaYin::SangZheMu,    // 壬子 癸丑
		NaYin::JinBoJin,     // 壬寅 癸卯
		NaYin::ChangLiuShui, // 壬辰 癸巳
		NaYin::YangLiuMu,    // 壬午 癸未
		NaYin::JianFengJin,  // 壬申 癸酉
		NaYin::DaHaiShui,    // 壬戌 癸亥
	],
];

/// 十神对照表
///
/// 行：五行关系（同我、我生、生我、我克、克我）
/// 列：[阴阳相同, 阴阳相异]
pub const SHISHEN_TABLE: [[ShiShen; 2]; 5] = [
	[ShiShen::BiJian, ShiShen::JieCai],      // 同我
	[ShiShen::ShiShen, ShiShen::ShangGuan],  // 我生
	[ShiShen::PianYin, ShiShen::ZhengYin],   // 生我
	[ShiShen::PianCai, ShiShen::ZhengCai],   // 我克
	[ShiShen::QiSha, ShiShen::ZhengGuan],    // 克我
];

/// 地支性格描述（命理摘要中年柱、月柱使用）
pub const DIZHI_TRAITS: [&str; 12] = [
	"聪明智慧", // 子
	"稳重务实", // 丑
	"积极进取", // 寅
	"温和细腻", // 卯
	"包容大度", // 辰
	"灵活多变", // 巳
	"热情开朗", // 午
	"踏实可靠", // 未
	"机智敏捷", // 申
	"精明能干", // 酉
	"忠诚可靠", // 戌
	"感性多情", // 亥
];

/// 日志目标
pub const LOG_TARGET: &str = "bazi-analysis";
