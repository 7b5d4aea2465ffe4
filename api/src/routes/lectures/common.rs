//! Lecture request/response models and the multipart form used by updates.

use crate::routes::common::{FieldErrors, invalid_pk};
use axum::extract::{Multipart, multipart::MultipartError};
use db::models::{course::Model as CourseModel, lecture::Model as LectureModel};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use util::paths::sanitize_filename;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LectureRequest {
    pub course: i64,

    #[validate(length(min = 1, max = 255, message = "Topic must be between 1 and 255 characters"))]
    pub topic: String,
}

impl LectureRequest {
    /// The course must be one the caller is a member of.
    pub async fn check_course(
        &self,
        db: &DatabaseConnection,
        user_id: i64,
        errors: &mut FieldErrors,
    ) -> Result<(), DbErr> {
        if CourseModel::find_one_for_user(db, user_id, self.course)
            .await?
            .is_none()
        {
            errors.add("course", invalid_pk(self.course));
        }
        Ok(())
    }
}

/// An uploaded presentation, held in memory until the row is updated.
#[derive(Debug)]
pub struct Presentation {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Raw multipart fields of a lecture update: `course`, `topic` and an
/// optional `presentation` file. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct LectureForm {
    course: Option<String>,
    topic: Option<String>,
    presentation: Option<Presentation>,
}

impl LectureForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("course") => form.course = Some(field.text().await?),
                Some("topic") => form.topic = Some(field.text().await?),
                Some("presentation") => {
                    let filename = field.file_name().unwrap_or_default().to_owned();
                    let bytes = field.bytes().await?.to_vec();
                    // An empty part without a file name means no file was chosen.
                    if !(filename.is_empty() && bytes.is_empty()) {
                        form.presentation = Some(Presentation { filename, bytes });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Converts the text fields into a request and reports what is wrong
    /// with them and with the file.
    pub fn into_parts(self) -> (LectureRequest, FieldErrors, Option<Presentation>) {
        let course = match self.course.as_deref().map(str::trim) {
            None | Some("") => Err("This field is required."),
            Some(raw) => raw.parse::<i64>().map_err(|_| "A valid integer is required."),
        };

        let req = LectureRequest {
            course: *course.as_ref().unwrap_or(&0),
            topic: self.topic.unwrap_or_default(),
        };

        let mut errors = FieldErrors::of(&req);
        if let Err(message) = course {
            errors.add("course", message);
        }

        if let Some(file) = &self.presentation {
            if file.bytes.is_empty() {
                errors.add("presentation", "The submitted file is empty.");
            }
            if sanitize_filename(&file.filename).is_none() {
                errors.add("presentation", "The submitted file name is not valid.");
            }
        }

        (req, errors, self.presentation)
    }
}

#[derive(Debug, Serialize)]
pub struct LectureResponse {
    pub id: i64,
    pub course: i64,
    pub topic: String,
    /// Storage-relative path of the presentation, if one was uploaded.
    pub presentation: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<LectureModel> for LectureResponse {
    fn from(lecture: LectureModel) -> Self {
        Self {
            id: lecture.id,
            course: lecture.course_id,
            topic: lecture.topic,
            presentation: lecture.presentation,
            created_at: lecture.created_at.to_rfc3339(),
            updated_at: lecture.updated_at.to_rfc3339(),
        }
    }
}
