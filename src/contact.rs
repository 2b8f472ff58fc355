use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Blocking user notification, `window.alert` in the browser.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
}

impl ContactForm {
    /// Same rule as the `required` attribute: a value must be present.
    pub fn check_required(&self) -> Result<(), ContactError> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map_or(Ok(()), |(field, _)| Err(ContactError::MissingField(field)))
    }
}

/// Acknowledge a contact request. Nothing is sent or kept.
pub fn submit_contact(form: &ContactForm, notifier: &mut impl Notifier) -> Result<(), ContactError> {
    form.check_required()?;
    log::info!("contact form acknowledged ({} chars)", form.message.len());
    notifier.notify(SUCCESS_MESSAGE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNotifier(Vec<String>);

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_submit_notifies_once() {
        let mut notifier = RecordingNotifier::default();
        assert_eq!(submit_contact(&filled(), &mut notifier), Ok(()));
        assert_eq!(notifier.0, vec![SUCCESS_MESSAGE.to_string()]);
    }

    #[test]
    fn test_submit_requires_every_field() {
        let cases = [
            (
                ContactForm {
                    name: String::new(),
                    ..filled()
                },
                "name",
            ),
            (
                ContactForm {
                    email: String::new(),
                    ..filled()
                },
                "email",
            ),
            (
                ContactForm {
                    message: String::new(),
                    ..filled()
                },
                "message",
            ),
        ];
        for (form, field) in cases {
            let mut notifier = RecordingNotifier::default();
            assert_eq!(
                submit_contact(&form, &mut notifier),
                Err(ContactError::MissingField(field))
            );
            assert!(notifier.0.is_empty());
        }
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        // matches the browser: `required` only rejects an empty value
        let form = ContactForm {
            message: " ".to_string(),
            ..filled()
        };
        let mut notifier = RecordingNotifier::default();
        assert!(submit_contact(&form, &mut notifier).is_ok());
        assert_eq!(notifier.0.len(), 1);
    }
}
