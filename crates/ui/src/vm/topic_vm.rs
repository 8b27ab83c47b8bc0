use services::TopicSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub name: String,
    pub avatar: String,
    pub count_label: String,
}

impl From<&TopicSummary> for TopicCardVm {
    fn from(topic: &TopicSummary) -> Self {
        let count_label = if topic.question_count == 1 {
            "1 question".to_string()
        } else {
            format!("{} questions", topic.question_count)
        };
        let avatar = topic
            .name
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |ch| ch.to_uppercase().to_string());

        Self {
            name: topic.name.clone(),
            avatar,
            count_label,
        }
    }
}

#[must_use]
pub fn map_topic_cards(topics: &[TopicSummary]) -> Vec<TopicCardVm> {
    topics.iter().map(TopicCardVm::from).collect()
}
