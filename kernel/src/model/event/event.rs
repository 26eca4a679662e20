#[derive(Debug)]
pub struct CreateEvent {
    pub title: String,
    pub date: String,
    pub max_participants: i32,
}
