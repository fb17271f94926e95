//! # 八字分析类型定义
//!
//! 天干地支、五行、十神、纳音等基础类型，以及请求、命盘和报告结构。

use alloc::string::String;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{traits::ConstU32, BoundedVec};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

use crate::constants::{
	DIZHI, DIZHI_WUXING, SHENGXIAO, TIANGAN, TIANGAN_WUXING, WUXING,
};

/// 姓名最大字节数（UTF-8）
pub const MAX_NAME_LEN: u32 = 32;
/// 出生日期文本最大长度（`YYYY-MM-DD`）
pub const MAX_DATE_LEN: u32 = 16;
/// 出生时间文本最大长度（`HH:MM`）
pub const MAX_TIME_LEN: u32 = 8;

// ============================================================================
// 天干、地支、五行
// ============================================================================

/// 天干（0-9）
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct TianGan(pub u8);

impl TianGan {
	/// 由索引构造，超出 0-9 返回 None
	pub fn new(index: u8) -> Option<Self> {
		(index < 10).then_some(Self(index))
	}

	/// 由字符解析
	pub fn from_char(c: char) -> Result<Self, AnalysisError> {
		TIANGAN
			.iter()
			.position(|&g| g == c)
			.map(|i| Self(i as u8))
			.ok_or(AnalysisError::InvalidSymbol(SymbolKind::TianGan))
	}

	pub fn to_char(self) -> char {
		TIANGAN[self.0 as usize % 10]
	}

	/// 天干五行
	pub fn to_wuxing(self) -> WuXing {
		TIANGAN_WUXING[self.0 as usize % 10]
	}

	/// 阳干（甲丙戊庚壬）索引为偶数
	pub fn is_yang(self) -> bool {
		self.0 % 2 == 0
	}
}

/// 地支（0-11）
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct DiZhi(pub u8);

impl DiZhi {
	/// 由索引构造，超出 0-11 返回 None
	pub fn new(index: u8) -> Option<Self> {
		(index < 12).then_some(Self(index))
	}

	/// 由字符解析
	pub fn from_char(c: char) -> Result<Self, AnalysisError> {
		DIZHI
			.iter()
			.position(|&z| z == c)
			.map(|i| Self(i as u8))
			.ok_or(AnalysisError::InvalidSymbol(SymbolKind::DiZhi))
	}

	pub fn to_char(self) -> char {
		DIZHI[self.0 as usize % 12]
	}

	/// 地支五行
	pub fn to_wuxing(self) -> WuXing {
		DIZHI_WUXING[self.0 as usize % 12]
	}

	/// 地支生肖
	pub fn shengxiao(self) -> &'static str {
		SHENGXIAO[self.0 as usize % 12]
	}
}

/// 五行（按相生顺序排列）
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub enum WuXing {
	/// 木
	#[default]
	Mu,
	/// 火
	Huo,
	/// 土
	Tu,
	/// 金
	Jin,
	/// 水
	Shui,
}

impl WuXing {
	/// 全部五行（相生顺序）
	pub const ALL: [WuXing; 5] = [WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui];

	/// 相生序列中的位置
	pub const fn index(self) -> u8 {
		match self {
			Self::Mu => 0,
			Self::Huo => 1,
			Self::Tu => 2,
			Self::Jin => 3,
			Self::Shui => 4,
		}
	}

	pub fn to_char(self) -> char {
		WUXING[self.index() as usize]
	}

	/// 我生者
	pub fn generates(self) -> WuXing {
		Self::ALL[(self.index() as usize + 1) % 5]
	}

	/// 我克者
	pub fn dominates(self) -> WuXing {
		Self::ALL[(self.index() as usize + 2) % 5]
	}
}

/// 五行关系（以日主为"我"）
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum WuXingRelation {
	/// 同我
	TongWo,
	/// 我生
	WoSheng,
	/// 生我
	ShengWo,
	/// 我克
	WoKe,
	/// 克我
	KeWo,
}

impl WuXingRelation {
	pub const fn index(self) -> usize {
		match self {
			Self::TongWo => 0,
			Self::WoSheng => 1,
			Self::ShengWo => 2,
			Self::WoKe => 3,
			Self::KeWo => 4,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::TongWo => "同我",
			Self::WoSheng => "我生",
			Self::ShengWo => "生我",
			Self::WoKe => "我克",
			Self::KeWo => "克我",
		}
	}

	/// 主客互换后的关系（我生↔生我，我克↔克我）
	pub fn reversed(self) -> Self {
		match self {
			Self::TongWo => Self::TongWo,
			Self::WoSheng => Self::ShengWo,
			Self::ShengWo => Self::WoSheng,
			Self::WoKe => Self::KeWo,
			Self::KeWo => Self::WoKe,
		}
	}
}

// ============================================================================
// 干支
// ============================================================================

/// 干支（一柱）
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct GanZhi {
	pub gan: TianGan,
	pub zhi: DiZhi,
}

impl GanZhi {
	/// 由六十甲子序号构造（甲子=0 … 癸亥=59）
	pub fn from_index(index: u8) -> Option<Self> {
		if index >= 60 {
			return None;
		}
		Some(Self { gan: TianGan(index % 10), zhi: DiZhi(index % 12) })
	}

	/// 干支阴阳是否相配（阳干配阳支、阴干配阴支）
	pub fn is_valid(&self) -> bool {
		self.gan.0 < 10 && self.zhi.0 < 12 && self.gan.0 % 2 == self.zhi.0 % 2
	}

	/// 六十甲子序号，阴阳不配时返回 None
	pub fn index(&self) -> Option<u8> {
		if !self.is_valid() {
			return None;
		}
		// i ≡ gan (mod 10) 且 i ≡ zhi (mod 12)
		let i = (6 * self.gan.0 as i32 - 5 * self.zhi.0 as i32).rem_euclid(60);
		Some(i as u8)
	}

	/// 下一个干支（天干、地支各自循环前进）
	pub fn next(&self) -> Self {
		Self {
			gan: TianGan((self.gan.0 % 10 + 1) % 10),
			zhi: DiZhi((self.zhi.0 % 12 + 1) % 12),
		}
	}

	/// 解析两字干支文本，如 "甲子"
	pub fn parse(text: &str) -> Result<Self, AnalysisError> {
		let mut chars = text.chars();
		let (Some(gan), Some(zhi), None) = (chars.next(), chars.next(), chars.next()) else {
			return Err(AnalysisError::InvalidSymbol(SymbolKind::GanZhi));
		};
		Ok(Self { gan: TianGan::from_char(gan)?, zhi: DiZhi::from_char(zhi)? })
	}
}

impl core::fmt::Display for GanZhi {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}{}", self.gan.to_char(), self.zhi.to_char())
	}
}

// ============================================================================
// 十神、纳音
// ============================================================================

/// 十神
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum ShiShen {
	/// 比肩
	BiJian,
	/// 劫财
	JieCai,
	/// 食神
	ShiShen,
	/// 伤官
	ShangGuan,
	/// 偏印
	PianYin,
	/// 正印
	ZhengYin,
	/// 偏财
	PianCai,
	/// 正财
	ZhengCai,
	/// 七杀
	QiSha,
	/// 正官
	ZhengGuan,
}

impl ShiShen {
	pub fn name(self) -> &'static str {
		match self {
			Self::BiJian => "比肩",
			Self::JieCai => "劫财",
			Self::ShiShen => "食神",
			Self::ShangGuan => "伤官",
			Self::PianYin => "偏印",
			Self::ZhengYin => "正印",
			Self::PianCai => "偏财",
			Self::ZhengCai => "正财",
			Self::QiSha => "七杀",
			Self::ZhengGuan => "正官",
		}
	}
}

/// 纳音（六十甲子两两一组，共三十种）
///
/// 变体按六十甲子顺序排列：甲子乙丑海中金、丙寅丁卯炉中火 …
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum NaYin {
	HaiZhongJin,
	LuZhongHuo,
	DaLinMu,
	LuPangTu,
	JianFengJin,
	ShanTouHuo,
	JianXiaShui,
	ChengTouTu,
	BaiLaJin,
	YangLiuMu,
	QuanZhongShui,
	WuShangTu,
	PiLiHuo,
	SongBaiMu,
	ChangLiuShui,
	ShaZhongJin,
	ShanXiaHuo,
	PingDiMu,
	BiShangTu,
	JinBoJin,
	FuDengHuo,
	TianHeShui,
	DaYiTu,
	ChaChuanJin,
	SangZheMu,
	DaXiShui,
	ShaZhongTu,
	TianShangHuo,
	ShiLiuMu,
	DaHaiShui,
}

impl NaYin {
	pub fn name(self) -> &'static str {
		match self {
			Self::HaiZhongJin => "海中金",
			Self::LuZhongHuo => "炉中火",
			Self::DaLinMu => "大林木",
			Self::LuPangTu => "路旁土",
			Self::JianFengJin => "剑锋金",
			Self::ShanTouHuo => "山头火",
			Self::JianXiaShui => "涧下水",
			Self::ChengTouTu => "城头土",
			Self::BaiLaJin => "白蜡金",
			Self::YangLiuMu => "杨柳木",
			Self::QuanZhongShui => "泉中水",
			Self::WuShangTu => "屋上土",
			Self::PiLiHuo => "霹雳火",
			Self::SongBaiMu => "松柏木",
			Self::ChangLiuShui => "长流水",
			Self::ShaZhongJin => "砂中金",
			Self::ShanXiaHuo => "山下火",
			Self::PingDiMu => "平地木",
			Self::BiShangTu => "壁上土",
			Self::JinBoJin => "金箔金",
			Self::FuDengHuo => "覆灯火",
			Self::TianHeShui => "天河水",
			Self::DaYiTu => "大驿土",
			Self::ChaChuanJin => "钗钏金",
			Self::SangZheMu => "桑柘木",
			Self::DaXiShui => "大溪水",
			Self::ShaZhongTu => "沙中土",
			Self::TianShangHuo => "天上火",
			Self::ShiLiuMu => "石榴木",
			Self::DaHaiShui => "大海水",
		}
	}

	/// 纳音所属五行（名称末字）
	pub fn wuxing(self) -> WuXing {
		match self {
			Self::HaiZhongJin
			| Self::JianFengJin
			| Self::BaiLaJin
			| Self::ShaZhongJin
			| Self::JinBoJin
			| Self::ChaChuanJin => WuXing::Jin,
			Self::LuZhongHuo
			| Self::ShanTouHuo
			| Self::PiLiHuo
			| Self::ShanXiaHuo
			| Self::FuDengHuo
			| Self::TianShangHuo => WuXing::Huo,
			Self::DaLinMu
			| Self::YangLiuMu
			| Self::SongBaiMu
			| Self::PingDiMu
			| Self::SangZheMu
			| Self::ShiLiuMu => WuXing::Mu,
			Self::LuPangTu
			| Self::ChengTouTu
			| Self::WuShangTu
			| Self::BiShangTu
			| Self::DaYiTu
			| Self::ShaZhongTu => WuXing::Tu,
			Self::JianXiaShui
			| Self::QuanZhongShui
			| Self::ChangLiuShui
			| Self::TianHeShui
			| Self::DaXiShui
			| Self::DaHaiShui => WuXing::Shui,
		}
	}
}

// ============================================================================
// 输入类型
// ============================================================================

/// 性别
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub enum Gender {
	#[default]
	Male,
	Female,
}

impl Gender {
	/// "男" / "女"
	pub fn label(self) -> &'static str {
		match self {
			Self::Male => "男",
			Self::Female => "女",
		}
	}
}

/// 输入日历类型
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub enum CalendarType {
	/// 公历（阳历）
	#[default]
	Solar,
	/// 农历（阴历）
	Lunar,
}

impl CalendarType {
	/// "阳历" / "阴历"
	pub fn label(self) -> &'static str {
		match self {
			Self::Solar => "阳历",
			Self::Lunar => "阴历",
		}
	}
}

/// 出生日期（按输入日历类型解释）
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct BirthDate {
	pub year: u16,
	pub month: u8,
	pub day: u8,
}

/// 出生时间（24 小时制）
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct BirthTime {
	pub hour: u8,
	pub minute: u8,
}

/// 公历日期
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct SolarDate {
	pub year: u16,
	pub month: u8,
	pub day: u8,
}

/// 农历日期
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct LunarDate {
	pub year: u16,
	pub month: u8,
	pub day: u8,
	/// 是否闰月
	pub is_leap_month: bool,
}

/// 日历服务返回的八字（四个两字干支文本）
#[derive(Clone, PartialEq, Eq, RuntimeDebug, Default)]
pub struct EightChar {
	pub year: String,
	pub month: String,
	pub day: String,
	pub hour: String,
}

impl EightChar {
	/// 按 [年, 月, 日, 时] 顺序返回
	pub fn pillars(&self) -> [&str; 4] {
		[self.year.as_str(), self.month.as_str(), self.day.as_str(), self.hour.as_str()]
	}
}

/// 八字分析请求
///
/// 文本字段沿用表单格式：日期 `YYYY-MM-DD`、时间 `HH:MM`。
/// 除姓名外，缺失任何字段都会在调用日历服务之前报错。
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, Debug, Default)]
pub struct BaziRequest {
	/// 姓名（可为空）
	pub name: BoundedVec<u8, ConstU32<MAX_NAME_LEN>>,
	pub calendar_type: Option<CalendarType>,
	pub birth_date: Option<BoundedVec<u8, ConstU32<MAX_DATE_LEN>>>,
	pub birth_time: Option<BoundedVec<u8, ConstU32<MAX_TIME_LEN>>>,
	pub gender: Option<Gender>,
	/// 农历闰月（公历输入时忽略）
	pub is_leap_month: bool,
}

// ============================================================================
// 结果类型
// ============================================================================

/// 八字命盘（单次请求内构建，不持久化）
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct BaziChart {
	pub name: String,
	pub gender: Gender,
	pub calendar_type: CalendarType,
	pub birth_date: BirthDate,
	pub birth_time: BirthTime,
	/// 日历服务解析出的农历日期
	pub lunar_date: LunarDate,
	/// 四柱 [年, 月, 日, 时]
	pub pillars: [GanZhi; 4],
	/// 每柱的 (天干五行, 地支五行)
	pub elements: [(WuXing, WuXing); 4],
	pub nayin: [NaYin; 4],
	/// 相对日主的十神
	pub shishen: [ShiShen; 4],
	pub zodiacs: [&'static str; 4],
	/// 命理摘要
	pub narrative: String,
}

impl BaziChart {
	/// 日主（日柱天干）
	pub fn day_master(&self) -> TianGan {
		self.pillars[2].gan
	}

	/// 生成对外报告（含带标签的分析文本）
	pub fn report(&self) -> BaziReport {
		crate::interpretation::build_report(self)
	}
}

/// 对外报告
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
pub struct BaziReport {
	/// 四柱文本，如 "甲子"
	pub pillars: [String; 4],
	/// 五行文本，如 "木水"
	pub elements: [String; 4],
	/// 生肖
	pub zodiacs: [String; 4],
	/// 多行分析文本
	pub analysis: String,
}

// ============================================================================
// 错误类型
// ============================================================================

/// 必填字段
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RequiredField {
	CalendarType,
	BirthDate,
	BirthTime,
	Gender,
}

/// 无效符号类别
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SymbolKind {
	/// 非十天干字符
	TianGan,
	/// 非十二地支字符
	DiZhi,
	/// 干支文本不是两个字符
	GanZhi,
}

/// 日历相关错误
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CalendarError {
	/// 日期文本无法解析
	MalformedDate,
	/// 时间文本无法解析
	MalformedTime,
	/// 公历日期不存在或超出支持范围
	InvalidSolarDate,
	/// 农历日期不存在（含闰月不存在）
	InvalidLunarDate,
	/// 未配置日历服务
	Unavailable,
}

/// 八字分析错误
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnalysisError {
	MissingField(RequiredField),
	InvalidSymbol(SymbolKind),
	Calendar(CalendarError),
}

impl From<CalendarError> for AnalysisError {
	fn from(e: CalendarError) -> Self {
		Self::Calendar(e)
	}
}
