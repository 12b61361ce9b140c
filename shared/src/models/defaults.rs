//! Seeded reference data
//!
//! The factory price book the engine ships with: door family catalog,
//! hardware catalogs, the default price matrix and the prefecture
//! shipping table. Admin overrides are overlaid onto this at startup;
//! the seed itself is never mutated.

use super::catalog::CatalogEntry;
use super::matrix::{MatrixPriceEntry, MatrixPrices};
use super::settings::AppSettings;
use std::collections::HashMap;

const PDF_BASE: &str = "http://25663cc9bda9549d.main.jp/aistudio/door/PDFsyousai";

fn leaf(id: &str, name: &str, p: i64, p2200: i64, p2400: i64, pdf: &str) -> CatalogEntry {
    CatalogEntry {
        detail_drawing_url: Some(format!("{PDF_BASE}/{pdf}")),
        ..CatalogEntry::leaf(id, name, p, p2200, p2400)
    }
}

fn door_types() -> Vec<CatalogEntry> {
    vec![
        leaf("hinged", "片開き", 24700, 27300, 28200, "KB3H2400.pdf"),
        CatalogEntry::group(
            "sliding-single",
            "片引き",
            vec![
                leaf("sliding-inset", "片引きインセット", 28800, 30300, 31200, "KHinset2400.pdf"),
                leaf("sliding-outset", "アウトセット", 33300, 26600, 26600, "HKoutset2400.pdf"),
                leaf("sliding-hikikomi", "引込み戸", 32000, 34000, 35000, "HIKIKOMI.pdf"),
            ],
        ),
        CatalogEntry::group(
            "sliding",
            "引き違い",
            vec![
                leaf("sliding-2", "2枚引き違い", 47100, 49200, 51100, "HT1.pdf"),
                leaf("sliding-3", "3枚引き違い", 150000, 160000, 160000, "HT3.pdf"),
                leaf("sliding-kata-2", "2枚片引き", 59300, 61600, 63400, "KH2maihikikomi.pdf"),
                leaf("sliding-kata-3", "3枚片引き", 85800, 88900, 91700, "KH2maihikikomi.pdf"),
                leaf("sliding-4", "4枚引き違い（2本溝）", 91700, 95300, 98900, "KH3maihikikomi.pdf"),
            ],
        ),
        CatalogEntry {
            price_h90: Some(12000),
            price_h120: Some(13800),
            ..leaf("double", "両開き戸", 20400, 22000, 22900, "HT4.pdf")
        },
        CatalogEntry::group(
            "folding",
            "折戸",
            vec![
                CatalogEntry::leaf("folding-2", "2枚折戸", 16200, 17200, 17500),
                leaf("folding-4", "4枚折戸", 26300, 27700, 28300, "OR4mai.pdf"),
                leaf("folding-6", "6枚折戸", 51600, 53700, 54700, "OREDO6.pdf"),
                leaf("folding-8", "8枚折戸", 66700, 69300, 70700, "OREDO8.pdf"),
            ],
        ),
        CatalogEntry {
            price_h90: Some(7700),
            price_h120: Some(9000),
            ..CatalogEntry::leaf("hinged-storage", "片開き物入", 12800, 13900, 14300)
        },
        CatalogEntry::group(
            "storage",
            "玄関収納",
            vec![
                CatalogEntry {
                    price_w80: Some(27000),
                    price_w120: Some(35000),
                    price_w160: Some(44700),
                    price_w200: Some(59900),
                    detail_drawing_url_w80: Some(format!("{PDF_BASE}/SBfloor7W800.pdf")),
                    detail_drawing_url_w120: Some(format!("{PDF_BASE}/SBfloor9W1200(L).pdf")),
                    detail_drawing_url_w160: Some(format!("{PDF_BASE}/SBfloor10W1600.pdf")),
                    detail_drawing_url_w200: Some(format!("{PDF_BASE}/SBfloor12W2000(L).pdf")),
                    ..CatalogEntry::leaf("storage-80", "フロアタイプ　高さ90㎝", 20000, 20000, 20000)
                },
                CatalogEntry {
                    price_w80: Some(40000),
                    price_w120: Some(0),
                    price_w160: Some(0),
                    price_w200: Some(0),
                    detail_drawing_url_w80: Some(format!("{PDF_BASE}/SBE1W800.pdf")),
                    detail_drawing_url_w120: Some(format!("{PDF_BASE}/SBE3W1200(L).pdf")),
                    detail_drawing_url_w160: Some(format!("{PDF_BASE}/SBE4W1600.pdf")),
                    detail_drawing_url_w200: Some(format!("{PDF_BASE}/SBE6W2000(L).pdf")),
                    ..CatalogEntry::leaf("storage-separate", "セパレート", 40000, 42000, 44000)
                },
                CatalogEntry {
                    price_w80: Some(45000),
                    price_w120: Some(0),
                    price_w160: Some(0),
                    price_w200: Some(0),
                    price_w80_r: Some(45000),
                    detail_drawing_url_w80: Some(String::new()),
                    detail_drawing_url_w120: Some(format!("{PDF_BASE}/SBL2W1200(L).pdf")),
                    detail_drawing_url_w160: Some(format!("{PDF_BASE}/SBL4W1600(L).pdf")),
                    detail_drawing_url_w200: Some(format!("{PDF_BASE}/SBL6W2000(L).pdf")),
                    detail_drawing_url_w80_r: Some(String::new()),
                    detail_drawing_url_w120_r: Some(format!("{PDF_BASE}/SBL1W1200(R).pdf")),
                    detail_drawing_url_w160_r: Some(format!("{PDF_BASE}/SBL3W1600(R).pdf")),
                    detail_drawing_url_w200_r: Some(format!("{PDF_BASE}/SBL5W2000(R).pdf")),
                    ..CatalogEntry::leaf("storage-200-l", "L型　高さ200㎝", 45000, 46000, 47000)
                },
                CatalogEntry {
                    price_w80: Some(52000),
                    price_w120: Some(0),
                    price_w160: Some(0),
                    price_w200: Some(0),
                    price_w80_r: Some(52000),
                    detail_drawing_url_w120: Some(format!("{PDF_BASE}/SBC2W1200(L).pdf")),
                    detail_drawing_url_w160: Some(format!("{PDF_BASE}/SBC4W1600(L).pdf")),
                    detail_drawing_url_w200: Some(format!("{PDF_BASE}/SBC6W2000(L).pdf")),
                    detail_drawing_url_w120_r: Some(format!("{PDF_BASE}/SBC1W1200(R).pdf")),
                    detail_drawing_url_w160_r: Some(format!("{PDF_BASE}/SBC3W1600(R).pdf")),
                    detail_drawing_url_w200_r: Some(format!("{PDF_BASE}/SBC5W2000(R).pdf")),
                    ..CatalogEntry::leaf("storage-200-u", "コの字型　高さ200㎝", 52000, 53500, 55000)
                },
                CatalogEntry {
                    price_w80: Some(50000),
                    price_w120: Some(0),
                    price_w160: Some(0),
                    price_w200: Some(0),
                    detail_drawing_url_w80: Some(format!("{PDF_BASE}/SBI1W800.pdf")),
                    detail_drawing_url_w120: Some(format!("{PDF_BASE}/SBI3W1200(L).pdf")),
                    detail_drawing_url_w160: Some(format!("{PDF_BASE}/SBI4W1600.pdf")),
                    ..CatalogEntry::leaf("storage-200-full", "トール　高さ200㎝", 50000, 51500, 53000)
                },
            ],
        ),
        CatalogEntry::group(
            "material",
            "造作材",
            vec![
                CatalogEntry::leaf("material-skirting", "スリム巾木t5.5×H23×L3960", 900, 900, 900),
                CatalogEntry::leaf("material-corner-skirting", "スリムコーナー巾木", 500, 500, 500),
                CatalogEntry::leaf("material-window-sill", "窓台", 4000, 4000, 4000),
            ],
        ),
    ]
}

fn frame_types() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::leaf("twoWay", "2方枠", 0, 0, 0),
        CatalogEntry::leaf("threeWay", "3方枠", 0, 0, 0),
    ]
}

fn colors() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::leaf("ww", "ピュアホワイト", 0, 0, 0),
        CatalogEntry::leaf("lg", "ライトグレー", 0, 0, 0),
        CatalogEntry::leaf("dg", "ダークグレー", 0, 0, 0),
        CatalogEntry::leaf("co", "コンフォートオーク", 0, 0, 0),
        CatalogEntry::leaf("ga", "グレージュアッシュ", 0, 0, 0),
        CatalogEntry::leaf("pw", "プレシャスウォールナット", 0, 0, 0),
    ]
}

fn handles() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::leaf("satin-nickel", "サテンニッケル", 0, 0, 0),
        CatalogEntry::leaf("white", "ホワイト", 0, 0, 0),
        CatalogEntry::leaf("black", "マットブラック", 0, 0, 0),
    ]
}

fn glass_styles() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::leaf("none", "ガラスなし", 0, 0, 0),
        CatalogEntry::leaf("clear", "透明強化ガラス5mm", 27300, 25900, 25500),
        CatalogEntry::leaf("frosted", "すりガラス", 21300, 21300, 21300),
    ]
}

fn locks() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::leaf("none", "なし", 0, 0, 0),
        CatalogEntry::leaf("display-lock", "表示錠", 2200, 2200, 2200),
    ]
}

fn matrix_prices() -> MatrixPrices {
    let entry = |h90, h120, h2000, h2200, h2400, pdf: &str| {
        MatrixPriceEntry::new(h90, h120, h2000, h2200, h2400, &format!("{PDF_BASE}/{pdf}"))
    };
    HashMap::from([
        ("hinged_2w_nl".into(), entry(0, 0, 24700, 27300, 28200, "KB3H2400.pdf")),
        ("hinged_2w_l".into(), entry(0, 0, 26900, 29600, 30600, "KB4H2400.pdf")),
        ("hinged_3w_nl".into(), entry(0, 0, 24700, 27300, 28200, "KB2000.pdf")),
        ("hinged_3w_l".into(), entry(0, 0, 26900, 29600, 30600, "KB2200key.pdf")),
        ("sliding-inset_2w_nl".into(), entry(0, 0, 28800, 30300, 31200, "KHinset2400.pdf")),
        ("sliding-inset_2w_l".into(), entry(0, 0, 32900, 34600, 35500, "KHinset2400key.pdf")),
        ("sliding-inset_3w_nl".into(), entry(0, 0, 28800, 30300, 31200, "KHinset2000.pdf")),
        ("sliding-inset_3w_l".into(), entry(0, 0, 32900, 34600, 35500, "KHinset2000key.pdf")),
        ("sliding-outset_2w_nl".into(), entry(0, 0, 26600, 26600, 26600, "HKoutset2400.pdf")),
        ("sliding-outset_2w_l".into(), entry(0, 0, 34400, 34400, 34400, "HKoutset2400key.pdf")),
        ("sliding-outset_2w_c".into(), entry(0, 0, 27000, 27000, 27000, "HKoutset2400IZ.pdf")),
        ("sliding-outset_2w_cl".into(), entry(0, 0, 32800, 32800, 32800, "HKoutset2400IZkey.pdf")),
        ("sliding-outset_3w_nl".into(), entry(0, 0, 33300, 26600, 26600, "HKoutset2000.pdf")),
        ("sliding-outset_3w_l".into(), entry(0, 0, 40700, 34400, 34400, "HKoutset2000key.pdf")),
        ("sliding-outset_3w_c".into(), entry(0, 0, 33700, 27000, 27000, "HKoutset2000IZ.pdf")),
        ("sliding-outset_3w_cl".into(), entry(0, 0, 39200, 32800, 32800, "HKoutset2000IZkey.pdf")),
        ("sliding-hikikomi_3w_nl".into(), entry(0, 0, 32200, 33500, 34400, "HIKIKOMI.pdf")),
        ("sliding-2_3w_nl".into(), entry(0, 0, 47100, 49200, 51100, "HT1.pdf")),
        ("sliding-3_3w_nl".into(), entry(0, 0, 0, 0, 0, "HT3.pdf")),
        ("sliding-4_3w_nl".into(), entry(0, 0, 91700, 95300, 98900, "HT4.pdf")),
        ("sliding-kata-2_L".into(), entry(0, 0, 59300, 61600, 63400, "KH2maihikikomi.pdf")),
        ("sliding-kata-2_R".into(), entry(0, 0, 59300, 61600, 63400, "KH2maihikikomi.pdf")),
        ("sliding-kata-3_L".into(), entry(0, 0, 85800, 88900, 91700, "KH3maihikikomi.pdf")),
        ("sliding-kata-3_R".into(), entry(0, 0, 85800, 88900, 91700, "KH3maihikikomi.pdf")),
        ("double_w73.5".into(), entry(12000, 13800, 20400, 22000, 22900, "RBH2400.pdf")),
        ("double_w120".into(), entry(0, 0, 0, 0, 0, "RBH2400.pdf")),
        ("folding-2_3w_nl".into(), entry(0, 0, 16200, 17200, 17500, "OREDO2.pdf")),
        ("folding-4_3w_nl".into(), entry(0, 0, 28800, 30200, 30800, "OR4mai.pdf")),
        ("folding-6_3w_nl".into(), entry(0, 0, 51600, 53700, 54700, "OREDO6.pdf")),
        ("folding-8_3w_nl".into(), entry(0, 0, 66700, 69300, 70700, "OREDO8.pdf")),
        ("hinged-storage_3w_nl".into(), entry(7700, 9000, 12800, 13900, 14300, "MO2000.pdf")),
    ])
}

fn shipping_rates() -> HashMap<String, i64> {
    [
        ("青森県", 58000),
        ("岩手県", 53000), ("宮城県", 53000), ("秋田県", 53000), ("山形県", 53000), ("福島県", 53000),
        ("茨城県", 48000), ("栃木県", 45000), ("群馬県", 45000),
        ("埼玉県", 43000), ("千葉県", 43000), ("東京都", 43000), ("神奈川県", 43000),
        ("新潟県", 42000), ("富山県", 42000), ("石川県", 42000), ("福井県", 42000),
        ("山梨県", 42000), ("長野県", 42000),
        ("岐阜県", 40000), ("静岡県", 42000), ("愛知県", 40000), ("三重県", 40000),
        ("滋賀県", 42000), ("京都府", 42000), ("大阪府", 42000), ("兵庫県", 45000),
        ("奈良県", 42000), ("和歌山県", 45000),
        ("鳥取県", 50000), ("島根県", 58000), ("岡山県", 50000), ("広島県", 50000), ("山口県", 58000),
        ("徳島県", 48000), ("香川県", 48000), ("愛媛県", 53000), ("高知県", 48000),
        ("福岡県", 68000), ("佐賀県", 68000), ("長崎県", 68000), ("熊本県", 68000),
        ("大分県", 68000), ("宮崎県", 68000), ("鹿児島県", 68000),
        ("沖縄県", 0), ("北海道", 0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_price: 0,
            price_per_sq_cm: 0,
            door_types: door_types(),
            frame_types: frame_types(),
            colors: colors(),
            handles: handles(),
            glass_styles: glass_styles(),
            locks: locks(),
            shipping_rates: shipping_rates(),
            matrix_prices: matrix_prices(),
        }
    }
}
