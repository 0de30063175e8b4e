use std::borrow::Cow;

#[numerus_derive::numerus_error]
pub enum SampleError {
    #[error("Io failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected value {value}{}", format_context(.context))]
    Rejected { value: i64, context: Option<Cow<'static, str>> },

    #[error("Internal failure{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), SampleError> {
    Err(std::io::Error::other("boom")).context("reading sample")?;
    Ok(())
}

fn main() {
    let _ = read();
    let _: SampleError = "plain message".into();
    let _: SampleError = String::from("owned message").into();
}
