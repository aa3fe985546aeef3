use super::domain::{AlertKind, PaymentInfo, Step, UserProfile, VehicleInfo};
use serde::Serialize;

pub const DEFAULT_NOREL_SCORE: u32 = 750;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyPhase {
    Entry,
    Contract,
    Garage,
    Preparation,
    Delivery,
    Active,
}

impl JourneyPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Contract => "Contract",
            Self::Garage => "Garage",
            Self::Preparation => "Preparation",
            Self::Delivery => "Delivery",
            Self::Active => "Active",
        }
    }
}

/// One mission card of the journey.
#[derive(Debug, Clone, Serialize)]
pub struct StepInfo {
    pub step: Step,
    pub phase: JourneyPhase,
    pub title: &'static str,
    pub description: &'static str,
    pub button_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertInfo {
    pub kind: AlertKind,
    pub title: &'static str,
    pub description: &'static str,
    pub button_label: &'static str,
}

/// Milestone on the road map shown above the mission card.
#[derive(Debug, Clone, Serialize)]
pub struct Station {
    pub id: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

static STEPS: [StepInfo; Step::COUNT] = [
    StepInfo {
        step: Step::clamped(1),
        phase: JourneyPhase::Entry,
        title: "前受金のお支払い (1/2)",
        description: "まずは最初の決済をお願いします。\nクレジットカードがご利用いただけます。",
        button_label: "支払画面へ進む",
    },
    StepInfo {
        step: Step::clamped(2),
        phase: JourneyPhase::Entry,
        title: "前受金のお支払い (2/2)",
        description: "残りの金額のお支払いをお願いします。\nこれが完了すると契約へ進めます。",
        button_label: "残金を支払う",
    },
    StepInfo {
        step: Step::clamped(3),
        phase: JourneyPhase::Contract,
        title: "電子契約書の締結",
        description: "契約内容をご確認の上、\n電子サインをお願いいたします。",
        button_label: "契約書を確認してサイン",
    },
    StepInfo {
        step: Step::clamped(4),
        phase: JourneyPhase::Contract,
        title: "引き落とし口座の登録",
        description: "毎月5日の引き落とし口座を\n設定してください。",
        button_label: "口座を登録する",
    },
    StepInfo {
        step: Step::clamped(5),
        phase: JourneyPhase::Garage,
        title: "必要書類の提出",
        description: "車庫証明と住民票の写真を\nアップロードしてください。",
        button_label: "書類をアップロード",
    },
    StepInfo {
        step: Step::clamped(6),
        phase: JourneyPhase::Preparation,
        title: "車両準備中",
        description: "名義変更・車検・クリーニング・\n整備・輸送手配を行っています。",
        button_label: "準備状況を確認",
    },
    StepInfo {
        step: Step::clamped(7),
        phase: JourneyPhase::Delivery,
        title: "納車日の確定",
        description: "お届け先の住所と\n希望日時を選択してください。",
        button_label: "納車日を予約する",
    },
    StepInfo {
        step: Step::clamped(8),
        phase: JourneyPhase::Active,
        title: "AI査定: 乗り換えチャンス",
        description: "現在の市場価格が高騰しています。\nお得に乗り換えるチャンスです。",
        button_label: "査定詳細・カタログを見る",
    },
];

static ALERTS: [AlertInfo; 3] = [
    AlertInfo {
        kind: AlertKind::License,
        title: "【重要】免許証の更新",
        description: "免許証の有効期限が近づいています。\n新しい免許証を登録してください。",
        button_label: "免許証を撮影する",
    },
    AlertInfo {
        kind: AlertKind::Insurance,
        title: "【重要】保険証券の更新",
        description:
            "保険証券の有効期限が近づいています。\n新しい保険証券をアップロードしてください。",
        button_label: "保険証券をアップロード",
    },
    AlertInfo {
        kind: AlertKind::Shaken,
        title: "【重要】車検の更新",
        description: "車検の有効期限が近づいています。\n車検証をアップロードしてください。",
        button_label: "車検証をアップロード",
    },
];

static STATIONS: [Station; 6] = [
    Station { id: 1, label: "申込" },
    Station { id: 2, label: "契約" },
    Station { id: 3, label: "書類" },
    Station { id: 4, label: "車両準備" },
    Station { id: 5, label: "納車" },
    Station { id: 6, label: "利用中" },
];

const APPLICATION_PHASE: PhaseInfo = PhaseInfo {
    name: "申込フェーズ",
    description: "前受金のお支払い",
};
const CONTRACT_PHASE: PhaseInfo = PhaseInfo {
    name: "契約フェーズ",
    description: "電子契約・口座登録",
};

static PHASES: [PhaseInfo; Step::COUNT] = [
    APPLICATION_PHASE,
    APPLICATION_PHASE,
    CONTRACT_PHASE,
    CONTRACT_PHASE,
    PhaseInfo {
        name: "書類フェーズ",
        description: "必要書類の提出",
    },
    PhaseInfo {
        name: "準備フェーズ",
        description: "車両の準備中",
    },
    PhaseInfo {
        name: "納車フェーズ",
        description: "納車日の確定",
    },
    PhaseInfo {
        name: "利用中",
        description: "カーライフをお楽しみください",
    },
];

pub fn steps() -> &'static [StepInfo] {
    &STEPS
}

pub fn step_info(step: Step) -> &'static StepInfo {
    &STEPS[step.index()]
}

pub fn alert_info(kind: AlertKind) -> &'static AlertInfo {
    match kind {
        AlertKind::License => &ALERTS[0],
        AlertKind::Insurance => &ALERTS[1],
        AlertKind::Shaken => &ALERTS[2],
    }
}

pub fn stations() -> &'static [Station] {
    &STATIONS
}

pub fn phase_for(step: Step) -> &'static PhaseInfo {
    &PHASES[step.index()]
}

pub fn default_user_profile() -> UserProfile {
    UserProfile {
        name: "山田 太郎".to_owned(),
        email: "taro.yamada@example.com".to_owned(),
        phone: "090-1234-5678".to_owned(),
        address: "東京都渋谷区神南1-2-3".to_owned(),
        zip_code: "150-0041".to_owned(),
        company: "株式会社サンプル".to_owned(),
        company_phone: "03-1234-5678".to_owned(),
        license_expiry: "2025-03-15".to_owned(),
        insurance_expiry: "2025-06-01".to_owned(),
        shaken_expiry: "2025-12-01".to_owned(),
    }
}

pub fn default_payment_info() -> PaymentInfo {
    PaymentInfo {
        next_payment_date: "1月5日".to_owned(),
        amount: 39_800,
    }
}

pub fn default_vehicle_info() -> VehicleInfo {
    VehicleInfo {
        name: "BMW 320d Mスポーツ".to_owned(),
        estimated_value: 1_450_000,
        recommendation_level: 5,
    }
}
