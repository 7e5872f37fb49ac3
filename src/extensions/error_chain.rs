use std::error::Error;

/// Renders an error followed by each of its underlying sources, e.g.
/// `error sending request: client error (Connect): tcp connect error: Connection refused (os error 111)`.
pub trait ErrorChain {
    fn display_chain(&self) -> String;
}

impl<E> ErrorChain for E
where
    E: Error + ?Sized,
{
    fn display_chain(&self) -> String {
        let mut text = self.to_string();
        let mut source = self.source();

        while let Some(cause) = source {
            let cause_text = cause.to_string();
            // Some errors already embed their source in their own message
            if !text.contains(&cause_text) {
                text.push_str(": ");
                text.push_str(&cause_text);
            }
            source = cause.source();
        }

        text
    }
}
