mod category;
mod decision;
mod housing;
mod position;
mod report;
mod scenario;

pub use category::{Category, CategorySet, ParseCategoryError};
pub use decision::{Decision, HousingLabel, HousingVariant};
pub use housing::{HousingSchedule, ScheduleEntry, monthly_payment};
pub use position::{Balances, FinancialPosition, Trend};
pub use report::{Report, ReportExport, YearSnapshot};
pub use scenario::{Impact, ScenarioOption};
