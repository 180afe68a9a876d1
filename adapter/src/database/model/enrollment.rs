use kernel::model::{
    enrollment::{Address, Enrollment},
    id::{EnrollmentId, UserId},
};

// enrollments と addresses の LEFT JOIN 結果。住所列はまとめて NULL になりうる。
#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub cep: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub address_detail: Option<String>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let EnrollmentRow {
            enrollment_id,
            user_id,
            name,
            cpf,
            phone,
            cep,
            street,
            city,
            state,
            number,
            neighborhood,
            address_detail,
        } = value;

        let address = match (cep, street, city, state, number, neighborhood) {
            (Some(cep), Some(street), Some(city), Some(state), Some(number), Some(neighborhood)) => {
                Some(Address {
                    cep,
                    street,
                    city,
                    state,
                    number,
                    neighborhood,
                    address_detail,
                })
            }
            _ => None,
        };

        Enrollment {
            id: enrollment_id,
            user_id,
            name,
            cpf,
            phone,
            address,
        }
    }
}
