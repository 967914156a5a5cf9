use std::fmt;

/// Blocking user notification raised by a view model.
/// 视图模型发出的阻塞式用户通知。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ProductCreated,
    ProductUpdated,
    SaveFailed,
    DeleteFailed,
}

impl Notice {
    pub fn is_error(self) -> bool {
        matches!(self, Notice::SaveFailed | Notice::DeleteFailed)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Notice::ProductCreated => "Product created",
            Notice::ProductUpdated => "Product updated",
            Notice::SaveFailed => "Error saving product",
            Notice::DeleteFailed => "Error deleting product",
        };
        f.write_str(text)
    }
}

pub trait NotifierPort: Send + Sync {
    fn notify(&self, notice: Notice);
}
