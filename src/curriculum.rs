//! Built-in default curriculum.
//!
//! The host application seeds its `themes` table with the standard Level-2
//! syllabus; this module ships the same list for demos, benchmarks, and
//! callers that do not bring their own curriculum. Estimated minutes cover
//! textbook study plus the first problem-set pass per topic.

use once_cell::sync::Lazy;

use crate::models::{Topic, Track};

static DEFAULT_CURRICULUM: Lazy<Vec<Topic>> = Lazy::new(|| {
    use Track::{Commercial, Industrial};
    vec![
        // 商業簿記
        Topic::new(1, Commercial, "C01", "商品売買", 1, Some(2), 150),
        Topic::new(2, Commercial, "C02", "現金・預金", 2, Some(14), 90),
        Topic::new(3, Commercial, "C03", "債権・債務", 3, Some(22), 120),
        Topic::new(4, Commercial, "C04", "手形・電子記録債権", 4, Some(34), 120),
        Topic::new(5, Commercial, "C05", "有価証券", 5, Some(46), 150),
        Topic::new(6, Commercial, "C06", "固定資産", 6, Some(58), 180),
        Topic::new(7, Commercial, "C07", "リース取引", 7, Some(74), 90),
        Topic::new(8, Commercial, "C08", "引当金", 8, Some(82), 90),
        Topic::new(9, Commercial, "C09", "外貨建取引", 9, Some(90), 120),
        Topic::new(10, Commercial, "C10", "税金・税効果会計", 10, Some(100), 150),
        Topic::new(11, Commercial, "C11", "株式会社の純資産", 11, Some(112), 150),
        Topic::new(12, Commercial, "C12", "決算整理と精算表", 12, Some(126), 180),
        Topic::new(13, Commercial, "C13", "財務諸表の作成", 13, Some(142), 150),
        Topic::new(14, Commercial, "C14", "本支店会計", 14, Some(156), 120),
        Topic::new(15, Commercial, "C15", "連結会計（基礎）", 15, Some(168), 210),
        Topic::new(16, Commercial, "C16", "連結会計（応用）", 16, Some(186), 180),
        // 工業簿記
        Topic::new(17, Industrial, "I01", "工業簿記の基礎", 1, Some(2), 90),
        Topic::new(18, Industrial, "I02", "材料費", 2, Some(10), 120),
        Topic::new(19, Industrial, "I03", "労務費", 3, Some(22), 90),
        Topic::new(20, Industrial, "I04", "経費", 4, Some(32), 60),
        Topic::new(21, Industrial, "I05", "製造間接費", 5, Some(38), 120),
        Topic::new(22, Industrial, "I06", "部門別原価計算", 6, Some(50), 150),
        Topic::new(23, Industrial, "I07", "個別原価計算", 7, Some(62), 120),
        Topic::new(24, Industrial, "I08", "総合原価計算（単純）", 8, Some(72), 150),
        Topic::new(
            25,
            Industrial,
            "I09",
            "総合原価計算（工程別・組別・等級別）",
            9,
            Some(84),
            180,
        ),
        Topic::new(26, Industrial, "I10", "標準原価計算", 10, Some(98), 180),
        Topic::new(
            27,
            Industrial,
            "I11",
            "直接原価計算・CVP分析",
            11,
            Some(112),
            150,
        ),
        Topic::new(28, Industrial, "I12", "本社工場会計", 12, Some(126), 90),
    ]
});

/// The default Level-2 curriculum: 16 commercial and 12 industrial topics.
pub fn default_topics() -> &'static [Topic] {
    &DEFAULT_CURRICULUM
}
