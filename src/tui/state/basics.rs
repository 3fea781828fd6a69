//! 基本信息步骤状态
//!
//! 字段逐个聚焦：文本/数字字段按 Enter 进入编辑，标签字段逐项提交，
//! 选择字段用左右键切换，多选字段用空格勾选。

use crate::campaign::catalog::{self, AgeBand, EnumOption, InfluencerTier, LANGUAGES};
use crate::campaign::form::{
    Budget, CampaignFormData, FormPatch, Location, parse_amount, parse_percentage, toggle_in_list,
};
use crate::tui::event::TuiEvent;
use crate::tui::state::StepAction;
use crate::tui::state::input::InputState;
use crate::tui::state::multi_select::MultiSelect;
use crate::tui::state::selection::{Selectable, SelectionState};

/// 字段交互方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 自由文本
    Text,
    /// 数字
    Number,
    /// 标签列表
    Tags,
    /// 单选（左右切换）
    Choice,
    /// 多选
    Toggles,
    /// 语言代码
    Language,
}

/// 基本信息字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicsField {
    Objective,
    AudienceCities,
    AudienceStates,
    AudienceCountry,
    AudienceGender,
    AudienceGenderPercentage,
    AudienceAge,
    BudgetAmount,
    BudgetCurrency,
    InfluencerGender,
    InfluencerCities,
    InfluencerStates,
    InfluencerCountry,
    InfluencerType,
    EngagementRate,
    Language,
}

impl BasicsField {
    /// 显示顺序
    pub const ALL: [BasicsField; 16] = [
        BasicsField::Objective,
        BasicsField::AudienceCities,
        BasicsField::AudienceStates,
        BasicsField::AudienceCountry,
        BasicsField::AudienceGender,
        BasicsField::AudienceGenderPercentage,
        BasicsField::AudienceAge,
        BasicsField::BudgetAmount,
        BasicsField::BudgetCurrency,
        BasicsField::InfluencerGender,
        BasicsField::InfluencerCities,
        BasicsField::InfluencerStates,
        BasicsField::InfluencerCountry,
        BasicsField::InfluencerType,
        BasicsField::EngagementRate,
        BasicsField::Language,
    ];

    pub fn kind(&self) -> FieldKind {
        match self {
            BasicsField::Objective
            | BasicsField::AudienceCountry
            | BasicsField::InfluencerCountry => FieldKind::Text,
            BasicsField::AudienceGenderPercentage
            | BasicsField::BudgetAmount
            | BasicsField::EngagementRate => FieldKind::Number,
            BasicsField::AudienceCities
            | BasicsField::AudienceStates
            | BasicsField::InfluencerCities
            | BasicsField::InfluencerStates => FieldKind::Tags,
            BasicsField::AudienceGender
            | BasicsField::BudgetCurrency
            | BasicsField::InfluencerGender => FieldKind::Choice,
            BasicsField::AudienceAge | BasicsField::InfluencerType => FieldKind::Toggles,
            BasicsField::Language => FieldKind::Language,
        }
    }

    /// 翻译键
    pub fn label_key(&self) -> &'static str {
        match self {
            BasicsField::Objective => "field_objective",
            BasicsField::AudienceCities => "field_audience_cities",
            BasicsField::AudienceStates => "field_audience_states",
            BasicsField::AudienceCountry => "field_audience_country",
            BasicsField::AudienceGender => "field_audience_gender",
            BasicsField::AudienceGenderPercentage => "field_audience_gender_percentage",
            BasicsField::AudienceAge => "field_audience_age",
            BasicsField::BudgetAmount => "field_budget_amount",
            BasicsField::BudgetCurrency => "field_budget_currency",
            BasicsField::InfluencerGender => "field_influencer_gender",
            BasicsField::InfluencerCities => "field_influencer_cities",
            BasicsField::InfluencerStates => "field_influencer_states",
            BasicsField::InfluencerCountry => "field_influencer_country",
            BasicsField::InfluencerType => "field_influencer_type",
            BasicsField::EngagementRate => "field_engagement_rate",
            BasicsField::Language => "field_language",
        }
    }

    /// 多选字段的选项数
    pub fn option_count(&self) -> usize {
        match self {
            BasicsField::AudienceAge => AgeBand::ALL.len(),
            BasicsField::InfluencerType => InfluencerTier::ALL.len(),
            _ => 0,
        }
    }

    /// 字段所属的地区（仅标签和国家字段）
    fn location<'a>(&self, form: &'a CampaignFormData) -> Option<&'a Location> {
        match self {
            BasicsField::AudienceCities
            | BasicsField::AudienceStates
            | BasicsField::AudienceCountry => Some(&form.audience_location),
            BasicsField::InfluencerCities
            | BasicsField::InfluencerStates
            | BasicsField::InfluencerCountry => Some(&form.influencer_location),
            _ => None,
        }
    }

    /// 标签字段的当前值
    pub fn tags<'a>(&self, form: &'a CampaignFormData) -> &'a [String] {
        match (self, self.location(form)) {
            (BasicsField::AudienceCities | BasicsField::InfluencerCities, Some(loc)) => {
                &loc.cities
            }
            (BasicsField::AudienceStates | BasicsField::InfluencerStates, Some(loc)) => {
                &loc.states
            }
            _ => &[],
        }
    }

    /// 非标签字段的显示文本
    pub fn display_value(&self, form: &CampaignFormData) -> String {
        match self {
            BasicsField::Objective => form.objective.clone(),
            BasicsField::AudienceCountry => form.audience_location.country.clone(),
            BasicsField::InfluencerCountry => form.influencer_location.country.clone(),
            BasicsField::AudienceGender => form.audience_gender.label().to_string(),
            BasicsField::InfluencerGender => form.influencer_gender.label().to_string(),
            BasicsField::AudienceGenderPercentage => {
                format!("{}%", form.audience_gender_percentage)
            }
            BasicsField::BudgetAmount => format!(
                "{} {}",
                form.campaign_budget.currency.symbol(),
                form.campaign_budget.amount
            ),
            BasicsField::BudgetCurrency => format!(
                "{} ({})",
                form.campaign_budget.currency.code(),
                form.campaign_budget.currency.name()
            ),
            BasicsField::EngagementRate => format!("{}%", form.engagement_rate),
            BasicsField::Language => form.language.clone().unwrap_or_default(),
            _ => self.tags(form).join(", "),
        }
    }

    /// 编辑开始时的输入框内容
    fn edit_value(&self, form: &CampaignFormData) -> String {
        let number = |v: f64| if v == 0.0 { String::new() } else { v.to_string() };
        match self {
            BasicsField::AudienceGenderPercentage => number(form.audience_gender_percentage),
            BasicsField::BudgetAmount => number(form.campaign_budget.amount),
            BasicsField::EngagementRate => number(form.engagement_rate),
            _ => self.display_value(form),
        }
    }
}

/// 以新值替换标签字段所在地区
fn tags_patch(field: BasicsField, form: &CampaignFormData, values: Vec<String>) -> FormPatch {
    let mut location = field.location(form).cloned().unwrap_or_default();
    match field {
        BasicsField::AudienceCities | BasicsField::InfluencerCities => location.cities = values,
        _ => location.states = values,
    }
    location_patch(field, location)
}

fn location_patch(field: BasicsField, location: Location) -> FormPatch {
    match field {
        BasicsField::AudienceCities
        | BasicsField::AudienceStates
        | BasicsField::AudienceCountry => FormPatch {
            audience_location: Some(location),
            ..Default::default()
        },
        _ => FormPatch {
            influencer_location: Some(location),
            ..Default::default()
        },
    }
}

/// 语言字段循环：未选择、LANGUAGES 各项
fn cycle_language(current: Option<&str>, forward: bool) -> Option<String> {
    let len = LANGUAGES.len() + 1;
    let index = current
        .and_then(|code| LANGUAGES.iter().position(|l| *l == code))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    next.checked_sub(1).map(|i| LANGUAGES[i].to_string())
}

/// 基本信息步骤状态
#[derive(Debug, Clone)]
pub struct BasicsState {
    /// 字段光标
    pub cursor: SelectionState,
    /// 是否在编辑文本
    pub editing: bool,
    /// 文本输入
    pub input: InputState,
    /// 标签输入
    pub tags: MultiSelect,
    /// 多选字段内的选项光标
    pub option_cursor: usize,
}

impl Default for BasicsState {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicsState {
    pub fn new() -> Self {
        Self {
            cursor: SelectionState::with_count(BasicsField::ALL.len()),
            editing: false,
            input: InputState::new(),
            tags: MultiSelect::new(),
            option_cursor: 0,
        }
    }

    /// 当前聚焦字段
    pub fn field(&self) -> BasicsField {
        BasicsField::ALL[self.cursor.index().min(BasicsField::ALL.len() - 1)]
    }

    /// 是否正在接收文本输入
    pub fn is_capturing_text(&self) -> bool {
        self.editing
    }

    /// 处理按键
    pub fn handle(&mut self, event: &TuiEvent, form: &CampaignFormData) -> StepAction {
        if self.editing {
            return match self.field().kind() {
                FieldKind::Tags => self.handle_tags(event, form),
                _ => self.handle_text(event, form),
            };
        }

        let field = self.field();
        match event {
            TuiEvent::Up | TuiEvent::BackTab => {
                self.cursor.prev();
                self.option_cursor = 0;
                StepAction::Handled
            }
            TuiEvent::Down | TuiEvent::Tab => {
                self.cursor.next();
                self.option_cursor = 0;
                StepAction::Handled
            }
            TuiEvent::Enter => match field.kind() {
                FieldKind::Tags => {
                    self.tags = MultiSelect::with_values(field.tags(form));
                    self.editing = true;
                    StepAction::Handled
                }
                FieldKind::Text | FieldKind::Number | FieldKind::Language => {
                    self.input = InputState::with_value(&field.edit_value(form));
                    self.editing = true;
                    StepAction::Handled
                }
                FieldKind::Choice => self.cycle_choice(form, true),
                FieldKind::Toggles => self.toggle_option(form),
            },
            TuiEvent::Char(' ') if field.kind() == FieldKind::Toggles => self.toggle_option(form),
            TuiEvent::Left | TuiEvent::Right => {
                let forward = *event == TuiEvent::Right;
                match field.kind() {
                    FieldKind::Choice => self.cycle_choice(form, forward),
                    FieldKind::Toggles => {
                        let count = field.option_count();
                        self.option_cursor = if forward {
                            (self.option_cursor + 1) % count
                        } else {
                            (self.option_cursor + count - 1) % count
                        };
                        StepAction::Handled
                    }
                    FieldKind::Language => StepAction::Update(FormPatch {
                        language: Some(cycle_language(form.language.as_deref(), forward)),
                        ..Default::default()
                    }),
                    _ => StepAction::Ignored,
                }
            }
            _ => StepAction::Ignored,
        }
    }

    fn handle_text(&mut self, event: &TuiEvent, form: &CampaignFormData) -> StepAction {
        match event {
            TuiEvent::Enter => match self.text_patch(form) {
                Some(patch) => {
                    self.editing = false;
                    self.input.clear();
                    StepAction::Update(patch)
                }
                None => StepAction::Rejected("invalid_language"),
            },
            TuiEvent::Escape => {
                self.editing = false;
                self.input.clear();
                StepAction::Handled
            }
            TuiEvent::Char(c) => {
                self.input.insert_char(*c);
                StepAction::Handled
            }
            TuiEvent::Backspace => {
                self.input.delete_before_cursor();
                StepAction::Handled
            }
            TuiEvent::Delete => {
                self.input.delete_after_cursor();
                StepAction::Handled
            }
            TuiEvent::Left => {
                self.input.move_cursor_left();
                StepAction::Handled
            }
            TuiEvent::Right => {
                self.input.move_cursor_right();
                StepAction::Handled
            }
            TuiEvent::Home => {
                self.input.move_cursor_to_start();
                StepAction::Handled
            }
            TuiEvent::End => {
                self.input.move_cursor_to_end();
                StepAction::Handled
            }
            _ => StepAction::Handled,
        }
    }

    fn handle_tags(&mut self, event: &TuiEvent, form: &CampaignFormData) -> StepAction {
        let done = match event {
            TuiEvent::Escape | TuiEvent::Tab | TuiEvent::BackTab => true,
            TuiEvent::Enter => self.tags.pending.value().trim().is_empty(),
            _ => false,
        };
        if done {
            self.editing = false;
            self.tags.pending.clear();
            return StepAction::Handled;
        }

        if self.tags.handle_event(event) {
            let values = self.tags.values().to_vec();
            StepAction::Update(tags_patch(self.field(), form, values))
        } else {
            StepAction::Handled
        }
    }

    /// 提交输入框内容；语言代码无效时返回 `None`
    fn text_patch(&self, form: &CampaignFormData) -> Option<FormPatch> {
        let raw = self.input.value();
        let field = self.field();
        let patch = match field {
            BasicsField::Objective => FormPatch {
                objective: Some(raw.to_string()),
                ..Default::default()
            },
            BasicsField::AudienceCountry | BasicsField::InfluencerCountry => {
                let mut location = field.location(form).cloned().unwrap_or_default();
                location.country = raw.trim().to_string();
                location_patch(field, location)
            }
            BasicsField::AudienceGenderPercentage => FormPatch {
                audience_gender_percentage: Some(parse_percentage(raw)),
                ..Default::default()
            },
            BasicsField::BudgetAmount => FormPatch {
                campaign_budget: Some(Budget {
                    amount: parse_amount(raw),
                    currency: form.campaign_budget.currency,
                }),
                ..Default::default()
            },
            BasicsField::EngagementRate => FormPatch {
                engagement_rate: Some(parse_percentage(raw)),
                ..Default::default()
            },
            BasicsField::Language => {
                let code = raw.trim();
                if code.is_empty() {
                    FormPatch {
                        language: Some(None),
                        ..Default::default()
                    }
                } else if catalog::is_language_code(code) {
                    FormPatch {
                        language: Some(Some(code.to_string())),
                        ..Default::default()
                    }
                } else {
                    return None;
                }
            }
            _ => FormPatch::default(),
        };
        Some(patch)
    }

    fn cycle_choice(&self, form: &CampaignFormData, forward: bool) -> StepAction {
        fn step<T: EnumOption>(value: T, forward: bool) -> T {
            if forward { value.next() } else { value.prev() }
        }

        let patch = match self.field() {
            BasicsField::AudienceGender => FormPatch {
                audience_gender: Some(step(form.audience_gender, forward)),
                ..Default::default()
            },
            BasicsField::InfluencerGender => FormPatch {
                influencer_gender: Some(step(form.influencer_gender, forward)),
                ..Default::default()
            },
            BasicsField::BudgetCurrency => FormPatch {
                campaign_budget: Some(Budget {
                    amount: form.campaign_budget.amount,
                    currency: step(form.campaign_budget.currency, forward),
                }),
                ..Default::default()
            },
            _ => return StepAction::Ignored,
        };
        StepAction::Update(patch)
    }

    fn toggle_option(&self, form: &CampaignFormData) -> StepAction {
        let patch = match self.field() {
            BasicsField::AudienceAge => {
                let band = AgeBand::ALL[self.option_cursor % AgeBand::ALL.len()];
                let checked = !form.audience_age.contains(&band);
                FormPatch {
                    audience_age: Some(toggle_in_list(&form.audience_age, band, checked)),
                    ..Default::default()
                }
            }
            BasicsField::InfluencerType => {
                let tier = InfluencerTier::ALL[self.option_cursor % InfluencerTier::ALL.len()];
                let checked = !form.influencer_type.contains(&tier);
                FormPatch {
                    influencer_type: Some(toggle_in_list(&form.influencer_type, tier, checked)),
                    ..Default::default()
                }
            }
            _ => return StepAction::Ignored,
        };
        StepAction::Update(patch)
    }
}
