use super::{unique, unix};
use crate::types;
use furumaru_core::domain::entities as entity;
use std::collections::HashMap;
use std::ops::Deref;

/// Public status of a schedule; a closed broadcast with a recording is
/// shown as archived.
#[must_use]
pub fn schedule_status(status: entity::ScheduleStatus, archived: bool) -> types::ScheduleStatus {
    match status {
        entity::ScheduleStatus::Waiting => types::ScheduleStatus::Waiting,
        entity::ScheduleStatus::Live => types::ScheduleStatus::Live,
        entity::ScheduleStatus::Closed if archived => types::ScheduleStatus::Archived,
        entity::ScheduleStatus::Closed => types::ScheduleStatus::Closed,
        entity::ScheduleStatus::Private | entity::ScheduleStatus::InProgress => {
            types::ScheduleStatus::Unknown
        }
    }
}

/// A livestream slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule(types::Schedule);

impl Schedule {
    /// Builds the slot. Without a broadcast the stream URLs are empty.
    #[must_use]
    pub fn new(schedule: &entity::Schedule, broadcast: Option<&entity::Broadcast>) -> Self {
        let archived = broadcast.is_some_and(|b| b.archived);
        let (distribution_url, metadata_url) = match broadcast {
            Some(b) if b.archived => (b.archive_url.clone(), b.archive_metadata_url.clone()),
            Some(b) => (b.output_url.clone(), String::new()),
            None => (String::new(), String::new()),
        };
        Self(types::Schedule {
            id: schedule.id.clone(),
            coordinator_id: schedule.coordinator_id.clone(),
            title: schedule.title.clone(),
            description: schedule.description.clone(),
            status: schedule_status(schedule.status, archived),
            thumbnail_url: schedule.thumbnail_url.clone(),
            distribution_url,
            metadata_url,
            start_at: unix(&schedule.start_at),
            end_at: unix(&schedule.end_at),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0.id
    }

    #[must_use]
    pub fn response(&self) -> &types::Schedule {
        &self.0
    }
}

/// Schedules in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedules(Vec<Schedule>);

impl Schedules {
    /// `broadcasts` is keyed by schedule ID.
    #[must_use]
    pub fn new(
        schedules: &[entity::Schedule],
        broadcasts: &HashMap<String, entity::Broadcast>,
    ) -> Self {
        Self(
            schedules
                .iter()
                .map(|s| Schedule::new(s, broadcasts.get(&s.id)))
                .collect(),
        )
    }

    #[must_use]
    pub fn coordinator_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|s| s.0.coordinator_id.clone()))
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Schedule> {
        self.0.iter().map(|s| s.0.clone()).collect()
    }
}

impl Deref for Schedules {
    type Target = [Schedule];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A producer segment within a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Live(types::Live);

impl Live {
    #[must_use]
    pub fn new(live: &entity::Live) -> Self {
        Self(types::Live {
            schedule_id: live.schedule_id.clone(),
            producer_id: live.producer_id.clone(),
            product_ids: live.product_ids.clone(),
            comment: live.comment.clone(),
            start_at: unix(&live.start_at),
            end_at: unix(&live.end_at),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::Live {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lives(Vec<Live>);

impl Lives {
    #[must_use]
    pub fn new(lives: &[entity::Live]) -> Self {
        Self(lives.iter().map(Live::new).collect())
    }

    #[must_use]
    pub fn producer_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|l| l.0.producer_id.clone()))
    }

    /// Products featured across every segment.
    #[must_use]
    pub fn product_ids(&self) -> Vec<String> {
        unique(self.0.iter().flat_map(|l| l.0.product_ids.iter().cloned()))
    }

    /// Segments per schedule, each list in input order.
    #[must_use]
    pub fn group_by_schedule_id(&self) -> HashMap<String, Lives> {
        let mut groups: HashMap<String, Lives> = HashMap::new();
        for live in &self.0 {
            groups
                .entry(live.0.schedule_id.clone())
                .or_default()
                .0
                .push(live.clone());
        }
        groups
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Live> {
        self.0.iter().map(|l| l.0.clone()).collect()
    }
}

impl Deref for Lives {
    type Target = [Live];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn schedule(id: &str, coordinator_id: &str, status: entity::ScheduleStatus) -> entity::Schedule {
        entity::Schedule {
            id: id.to_string(),
            coordinator_id: coordinator_id.to_string(),
            title: "朝どれ野菜マルシェ".to_string(),
            description: "旬の野菜をお届けします".to_string(),
            thumbnail_url: "https://example.com/schedule.png".to_string(),
            public: true,
            approved: true,
            status,
            start_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap(),
            ..Default::default()
        }
    }

    fn broadcast(schedule_id: &str, archived: bool) -> entity::Broadcast {
        entity::Broadcast {
            schedule_id: schedule_id.to_string(),
            input_url: "rtmp://example.com/input".to_string(),
            output_url: "https://example.com/live/index.m3u8".to_string(),
            archive_url: "https://example.com/archive.mp4".to_string(),
            archive_metadata_url: "https://example.com/archive.json".to_string(),
            archived,
        }
    }

    fn live(schedule_id: &str, producer_id: &str, product_ids: &[&str]) -> entity::Live {
        entity::Live {
            id: format!("{schedule_id}-{producer_id}"),
            schedule_id: schedule_id.to_string(),
            producer_id: producer_id.to_string(),
            product_ids: product_ids.iter().map(ToString::to_string).collect(),
            comment: "よろしくお願いします".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_schedule_status() {
        use entity::ScheduleStatus as S;

        let cases = [
            (S::Private, false, types::ScheduleStatus::Unknown),
            (S::InProgress, false, types::ScheduleStatus::Unknown),
            (S::Waiting, false, types::ScheduleStatus::Waiting),
            (S::Live, false, types::ScheduleStatus::Live),
            (S::Live, true, types::ScheduleStatus::Live),
            (S::Closed, false, types::ScheduleStatus::Closed),
            (S::Closed, true, types::ScheduleStatus::Archived),
        ];
        for (status, archived, expected) in cases {
            assert_eq!(schedule_status(status, archived), expected, "{status:?} {archived}");
        }
    }

    #[test]
    fn test_schedule_new() {
        let broadcast = broadcast("schedule-id", false);
        let actual = Schedule::new(
            &schedule("schedule-id", "coordinator-id", entity::ScheduleStatus::Live),
            Some(&broadcast),
        );
        let expected = types::Schedule {
            id: "schedule-id".to_string(),
            coordinator_id: "coordinator-id".to_string(),
            title: "朝どれ野菜マルシェ".to_string(),
            description: "旬の野菜をお届けします".to_string(),
            status: types::ScheduleStatus::Live,
            thumbnail_url: "https://example.com/schedule.png".to_string(),
            distribution_url: "https://example.com/live/index.m3u8".to_string(),
            metadata_url: String::new(),
            start_at: 1_704_067_200,
            end_at: 1_704_074_400,
        };
        assert_eq!(actual.response(), &expected);
    }

    #[test]
    fn test_schedule_archived() {
        let broadcast = broadcast("schedule-id", true);
        let actual = Schedule::new(
            &schedule("schedule-id", "coordinator-id", entity::ScheduleStatus::Closed),
            Some(&broadcast),
        );
        assert_eq!(actual.response().status, types::ScheduleStatus::Archived);
        assert_eq!(actual.response().distribution_url, "https://example.com/archive.mp4");
        assert_eq!(actual.response().metadata_url, "https://example.com/archive.json");

        let json = serde_json::to_value(actual.response()).unwrap();
        assert_eq!(json["status"], 4);
        assert_eq!(json["distributionUrl"], "https://example.com/archive.mp4");
    }

    #[test]
    fn test_schedules() {
        let broadcasts = HashMap::from([("s-2".to_string(), broadcast("s-2", true))]);
        let schedules = Schedules::new(
            &[
                schedule("s-1", "coordinator-1", entity::ScheduleStatus::Waiting),
                schedule("s-2", "coordinator-2", entity::ScheduleStatus::Closed),
                schedule("s-3", "coordinator-1", entity::ScheduleStatus::Closed),
            ],
            &broadcasts,
        );
        assert_eq!(schedules.coordinator_ids(), vec!["coordinator-1", "coordinator-2"]);
        let statuses: Vec<_> = schedules.iter().map(|s| s.response().status).collect();
        assert_eq!(
            statuses,
            vec![
                types::ScheduleStatus::Waiting,
                types::ScheduleStatus::Archived,
                types::ScheduleStatus::Closed,
            ]
        );
        assert_eq!(schedules[0].response().distribution_url, "");
    }

    #[test]
    fn test_lives() {
        let lives = Lives::new(&[
            live("s-1", "producer-1", &["p-1", "p-2"]),
            live("s-2", "producer-2", &["p-2", "p-3"]),
            live("s-1", "producer-2", &["p-4"]),
        ]);
        assert_eq!(lives.producer_ids(), vec!["producer-1", "producer-2"]);
        assert_eq!(lives.product_ids(), vec!["p-1", "p-2", "p-3", "p-4"]);

        let groups = lives.group_by_schedule_id();
        assert_eq!(groups.len(), 2);
        let first: Vec<_> = groups["s-1"]
            .iter()
            .map(|l| l.response().producer_id.clone())
            .collect();
        assert_eq!(first, vec!["producer-1", "producer-2"]);
        assert_eq!(groups["s-2"].len(), 1);

        let json = serde_json::to_value(&lives.response()[0]).unwrap();
        assert_eq!(json["scheduleId"], "s-1");
        assert_eq!(json["productIds"][1], "p-2");
    }
}
