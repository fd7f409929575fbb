use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every exercise the energy model knows about. Wire form is the snake_case key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Walking,
    BriskWalking,
    Hiking,
    Running,
    Jogging,
    Sprint,
    Cycling,
    CyclingLeisure,
    CyclingFast,
    Swimming,
    SwimmingLeisure,
    SwimmingFast,
    Gym,
    WeightTraining,
    Aerobics,
    Yoga,
    Basketball,
    Football,
    Badminton,
    Tennis,
    TableTennis,
    Park,
    Indoor,
    Outdoor,
    Dancing,
    StairClimbing,
    JumpingRope,
    TaiChi,
    Stretching,
}

/// Static catalog row: METs value plus display names.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub exercise: ExerciseType,
    pub mets: f64,
    pub name_cn: &'static str,
    pub name_en: &'static str,
    pub description: &'static str,
}

const fn entry(
    exercise: ExerciseType,
    mets: f64,
    name_cn: &'static str,
    name_en: &'static str,
    description: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        exercise,
        mets,
        name_cn,
        name_en,
        description,
    }
}

/// METs values follow the Compendium of Physical Activities.
pub const CATALOG: &[CatalogEntry] = &[
    entry(ExerciseType::Walking, 3.5, "步行", "Walking", "普通速度步行（约4-5km/h）"),
    entry(ExerciseType::BriskWalking, 4.3, "快走", "Brisk Walking", "快速步行（约5.5-6.5km/h）"),
    entry(ExerciseType::Hiking, 5.3, "徒步", "Hiking", "野外徒步、登山"),
    entry(ExerciseType::Running, 8.0, "跑步", "Running", "中等速度跑步（约8km/h）"),
    entry(ExerciseType::Jogging, 7.0, "慢跑", "Jogging", "轻松慢跑（约6-7km/h）"),
    entry(ExerciseType::Sprint, 12.0, "冲刺跑", "Sprint", "高强度冲刺跑"),
    entry(ExerciseType::Cycling, 6.0, "骑行", "Cycling", "中等速度骑行（约16-19km/h）"),
    entry(ExerciseType::CyclingLeisure, 4.0, "休闲骑行", "Leisure Cycling", "休闲慢速骑行"),
    entry(ExerciseType::CyclingFast, 10.0, "快速骑行", "Fast Cycling", "高速骑行（>25km/h）"),
    entry(ExerciseType::Swimming, 7.0, "游泳", "Swimming", "中等强度游泳"),
    entry(ExerciseType::SwimmingLeisure, 5.0, "休闲游泳", "Leisure Swimming", "休闲慢速游泳"),
    entry(ExerciseType::SwimmingFast, 10.0, "快速游泳", "Fast Swimming", "高强度游泳训练"),
    entry(ExerciseType::Gym, 5.0, "健身房综合训练", "Gym Workout", "健身房器械+有氧综合训练"),
    entry(ExerciseType::WeightTraining, 5.0, "力量训练", "Weight Training", "哑铃或自重力量训练"),
    entry(ExerciseType::Aerobics, 6.5, "有氧健身操", "Aerobics", "跟随视频进行有氧健身操训练"),
    entry(ExerciseType::Yoga, 2.5, "瑜伽", "Yoga", "瑜伽练习，适合放松与柔韧性训练"),
    entry(ExerciseType::Basketball, 6.5, "篮球", "Basketball", "篮球比赛或投篮练习"),
    entry(ExerciseType::Football, 7.0, "足球", "Football", "足球比赛或训练"),
    entry(ExerciseType::Badminton, 5.5, "羽毛球", "Badminton", "羽毛球运动"),
    entry(ExerciseType::Tennis, 7.0, "网球", "Tennis", "网球运动"),
    entry(ExerciseType::TableTennis, 4.0, "乒乓球", "Table Tennis", "室内乒乓球运动"),
    entry(ExerciseType::Park, 3.5, "公园散步", "Park Walk", "公园内散步游览"),
    entry(ExerciseType::Indoor, 4.0, "室内运动", "Indoor Exercise", "一般室内运动"),
    entry(ExerciseType::Outdoor, 4.5, "户外运动", "Outdoor Exercise", "一般户外运动"),
    entry(ExerciseType::Dancing, 5.0, "舞蹈", "Dancing", "跟随音乐进行舞蹈运动"),
    entry(ExerciseType::StairClimbing, 8.0, "爬楼梯", "Stair Climbing", "在楼梯间进行爬楼梯运动"),
    entry(ExerciseType::JumpingRope, 11.0, "跳绳", "Jumping Rope", "高效室内有氧运动，燃脂效果好"),
    entry(ExerciseType::TaiChi, 3.0, "太极拳", "Tai Chi", "太极拳练习，适合舒缓运动"),
    entry(ExerciseType::Stretching, 2.3, "拉伸", "Stretching", "全身拉伸放松，适合低强度需求"),
];

/// Chinese names accepted when parsing user-facing input.
const CHINESE_ALIASES: &[(&str, ExerciseType)] = &[
    ("步行", ExerciseType::Walking),
    ("散步", ExerciseType::Walking),
    ("走路", ExerciseType::Walking),
    ("快走", ExerciseType::BriskWalking),
    ("徒步", ExerciseType::Hiking),
    ("登山", ExerciseType::Hiking),
    ("跑步", ExerciseType::Running),
    ("慢跑", ExerciseType::Jogging),
    ("冲刺", ExerciseType::Sprint),
    ("骑行", ExerciseType::Cycling),
    ("骑车", ExerciseType::Cycling),
    ("骑自行车", ExerciseType::Cycling),
    ("游泳", ExerciseType::Swimming),
    ("健身", ExerciseType::Gym),
    ("健身房", ExerciseType::Gym),
    ("力量训练", ExerciseType::WeightTraining),
    ("举重", ExerciseType::WeightTraining),
    ("有氧", ExerciseType::Aerobics),
    ("瑜伽", ExerciseType::Yoga),
    ("篮球", ExerciseType::Basketball),
    ("足球", ExerciseType::Football),
    ("羽毛球", ExerciseType::Badminton),
    ("网球", ExerciseType::Tennis),
    ("乒乓球", ExerciseType::TableTennis),
    ("公园", ExerciseType::Park),
    ("室内", ExerciseType::Indoor),
    ("室外", ExerciseType::Outdoor),
    ("户外", ExerciseType::Outdoor),
    ("跳舞", ExerciseType::Dancing),
    ("舞蹈", ExerciseType::Dancing),
    ("爬楼梯", ExerciseType::StairClimbing),
    ("跳绳", ExerciseType::JumpingRope),
    ("太极", ExerciseType::TaiChi),
    ("太极拳", ExerciseType::TaiChi),
    ("拉伸", ExerciseType::Stretching),
];

impl ExerciseType {
    pub fn all() -> impl Iterator<Item = ExerciseType> {
        CATALOG.iter().map(|e| e.exercise)
    }

    pub fn catalog_entry(&self) -> &'static CatalogEntry {
        // Every variant has a row; `test_catalog_has_exactly_one_entry_per_type` guards this.
        CATALOG
            .iter()
            .find(|e| e.exercise == *self)
            .unwrap_or(&CATALOG[0])
    }

    pub fn mets(&self) -> f64 {
        self.catalog_entry().mets
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Walking => "walking",
            ExerciseType::BriskWalking => "brisk_walking",
            ExerciseType::Hiking => "hiking",
            ExerciseType::Running => "running",
            ExerciseType::Jogging => "jogging",
            ExerciseType::Sprint => "sprint",
            ExerciseType::Cycling => "cycling",
            ExerciseType::CyclingLeisure => "cycling_leisure",
            ExerciseType::CyclingFast => "cycling_fast",
            ExerciseType::Swimming => "swimming",
            ExerciseType::SwimmingLeisure => "swimming_leisure",
            ExerciseType::SwimmingFast => "swimming_fast",
            ExerciseType::Gym => "gym",
            ExerciseType::WeightTraining => "weight_training",
            ExerciseType::Aerobics => "aerobics",
            ExerciseType::Yoga => "yoga",
            ExerciseType::Basketball => "basketball",
            ExerciseType::Football => "football",
            ExerciseType::Badminton => "badminton",
            ExerciseType::Tennis => "tennis",
            ExerciseType::TableTennis => "table_tennis",
            ExerciseType::Park => "park",
            ExerciseType::Indoor => "indoor",
            ExerciseType::Outdoor => "outdoor",
            ExerciseType::Dancing => "dancing",
            ExerciseType::StairClimbing => "stair_climbing",
            ExerciseType::JumpingRope => "jumping_rope",
            ExerciseType::TaiChi => "tai_chi",
            ExerciseType::Stretching => "stretching",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");

        if let Some(found) = ExerciseType::all().find(|e| e.as_str() == normalized) {
            return Ok(found);
        }

        CHINESE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == s.trim())
            .map(|(_, exercise)| *exercise)
            .ok_or_else(|| format!("Unknown exercise type: '{}'", s))
    }
}

/// An entry of the fixed indoor substitution catalog.
#[derive(Debug, Clone, Copy)]
pub struct IndoorExercise {
    pub name: &'static str,
    pub exercise: ExerciseType,
    pub description: &'static str,
}

impl IndoorExercise {
    pub fn mets(&self) -> f64 {
        self.exercise.mets()
    }
}

pub const INDOOR_CATALOG: &[IndoorExercise] = &[
    IndoorExercise {
        name: "室内跳绳",
        exercise: ExerciseType::JumpingRope,
        description: "高效室内有氧运动，燃脂效果好",
    },
    IndoorExercise {
        name: "有氧健身操",
        exercise: ExerciseType::Aerobics,
        description: "跟随视频进行有氧健身操训练",
    },
    IndoorExercise {
        name: "瑜伽",
        exercise: ExerciseType::Yoga,
        description: "瑜伽练习，适合放松与柔韧性训练",
    },
    IndoorExercise {
        name: "力量训练",
        exercise: ExerciseType::WeightTraining,
        description: "哑铃或自重力量训练",
    },
    IndoorExercise {
        name: "室内骑行（动感单车）",
        exercise: ExerciseType::Cycling,
        description: "使用动感单车进行室内骑行训练",
    },
    IndoorExercise {
        name: "爬楼梯",
        exercise: ExerciseType::StairClimbing,
        description: "在楼梯间进行爬楼梯运动",
    },
    IndoorExercise {
        name: "健身房综合训练",
        exercise: ExerciseType::Gym,
        description: "健身房器械+有氧综合训练",
    },
    IndoorExercise {
        name: "拉伸运动",
        exercise: ExerciseType::Stretching,
        description: "全身拉伸放松，适合低强度需求",
    },
    IndoorExercise {
        name: "室内跑步机",
        exercise: ExerciseType::Running,
        description: "跑步机上中速跑步",
    },
    IndoorExercise {
        name: "太极拳",
        exercise: ExerciseType::TaiChi,
        description: "太极拳练习，适合舒缓运动",
    },
    IndoorExercise {
        name: "舞蹈",
        exercise: ExerciseType::Dancing,
        description: "跟随音乐进行舞蹈运动",
    },
    IndoorExercise {
        name: "室内乒乓球",
        exercise: ExerciseType::TableTennis,
        description: "室内乒乓球运动",
    },
];
