use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Backlog => "backlog",
            IssueStatus::Todo => "todo",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Done => "done",
        }
    }
}

impl FromSql<Text, Pg> for IssueStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "backlog" => Ok(IssueStatus::Backlog),
            "todo" => Ok(IssueStatus::Todo),
            "in_progress" => Ok(IssueStatus::InProgress),
            "done" => Ok(IssueStatus::Done),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for IssueStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl IssuePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Low => "low",
            IssuePriority::Medium => "medium",
            IssuePriority::High => "high",
            IssuePriority::Critical => "critical",
        }
    }
}

impl FromSql<Text, Pg> for IssuePriority {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "low" => Ok(IssuePriority::Low),
            "medium" => Ok(IssuePriority::Medium),
            "high" => Ok(IssuePriority::High),
            "critical" => Ok(IssuePriority::Critical),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for IssuePriority {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Bug,
    Task,
    Story,
    Epic,
}

impl FromSql<Text, Pg> for IssueType {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "bug" => Ok(IssueType::Bug),
            "task" => Ok(IssueType::Task),
            "story" => Ok(IssueType::Story),
            "epic" => Ok(IssueType::Epic),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for IssueType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            IssueType::Bug => out.write_all(b"bug")?,
            IssueType::Task => out.write_all(b"task")?,
            IssueType::Story => out.write_all(b"story")?,
            IssueType::Epic => out.write_all(b"epic")?,
        }
        Ok(IsNull::No)
    }
}

/// Grouping dimension of a swimlane. `Custom` lanes carry their own `field`
/// key and cannot be matched against issue columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum SwimlaneType {
    Assignee,
    Epic,
    Priority,
    Component,
    FixVersion,
    Custom,
}

impl SwimlaneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwimlaneType::Assignee => "assignee",
            SwimlaneType::Epic => "epic",
            SwimlaneType::Priority => "priority",
            SwimlaneType::Component => "component",
            SwimlaneType::FixVersion => "fix_version",
            SwimlaneType::Custom => "custom",
        }
    }

    pub fn all() -> Vec<SwimlaneType> {
        vec![
            SwimlaneType::Assignee,
            SwimlaneType::Epic,
            SwimlaneType::Priority,
            SwimlaneType::Component,
            SwimlaneType::FixVersion,
            SwimlaneType::Custom,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SwimlaneType::Assignee => "Assignee",
            SwimlaneType::Epic => "Epic",
            SwimlaneType::Priority => "Priority",
            SwimlaneType::Component => "Component",
            SwimlaneType::FixVersion => "Fix Version",
            SwimlaneType::Custom => "Custom",
        }
    }

    /// Only these kinds have a value space that can be enumerated from
    /// issue data, so only they support group auto-derivation.
    pub fn supports_auto_groups(&self) -> bool {
        matches!(
            self,
            SwimlaneType::Assignee | SwimlaneType::Epic | SwimlaneType::Priority
        )
    }
}

impl FromSql<Text, Pg> for SwimlaneType {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "assignee" => Ok(SwimlaneType::Assignee),
            "epic" => Ok(SwimlaneType::Epic),
            "priority" => Ok(SwimlaneType::Priority),
            "component" => Ok(SwimlaneType::Component),
            "fix_version" => Ok(SwimlaneType::FixVersion),
            "custom" => Ok(SwimlaneType::Custom),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for SwimlaneType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Burndown,
    Velocity,
    CumulativeFlow,
    UserProductivity,
    Generic,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Burndown => "burndown",
            ReportType::Velocity => "velocity",
            ReportType::CumulativeFlow => "cumulative_flow",
            ReportType::UserProductivity => "user_productivity",
            ReportType::Generic => "generic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Burndown => "Burndown",
            ReportType::Velocity => "Velocity",
            ReportType::CumulativeFlow => "Cumulative Flow",
            ReportType::UserProductivity => "User Productivity",
            ReportType::Generic => "Board Analytics",
        }
    }

    pub fn all() -> Vec<ReportType> {
        vec![
            ReportType::Burndown,
            ReportType::Velocity,
            ReportType::CumulativeFlow,
            ReportType::UserProductivity,
            ReportType::Generic,
        ]
    }
}

impl FromSql<Text, Pg> for ReportType {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "burndown" => Ok(ReportType::Burndown),
            "velocity" => Ok(ReportType::Velocity),
            "cumulative_flow" => Ok(ReportType::CumulativeFlow),
            "user_productivity" => Ok(ReportType::UserProductivity),
            "generic" => Ok(ReportType::Generic),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for ReportType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}
