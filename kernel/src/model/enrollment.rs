use crate::model::id::{EnrollmentId, UserId};

// イベント参加登録。サインアップ時に作られ、この文脈では読み取り専用。
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub address: Option<Address>,
}

#[derive(Debug, Clone)]
pub struct Address {
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}
