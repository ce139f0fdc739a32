//! User-facing alert and label text.

pub const LOAD_FAILED: &str = "글을 불러오는 데 실패했습니다.";
pub const LOAD_COMMUNICATION_FAILED: &str = "서버와 통신 중 문제가 발생했습니다.";
pub const UPDATE_SUCCEEDED: &str = "글이 성공적으로 수정되었습니다.";
pub const UPDATE_FAILED: &str = "글 수정에 실패했습니다.";
pub const UPDATE_SERVER_ERROR: &str = "서버 오류가 발생했습니다. 다시 시도해주세요.";

pub const NO_FILE_SELECTED: &str = "선택된 파일 없음";

/// Label for an attachment already stored on the server.
pub fn existing_attachment_label(file_name: &str) -> String {
    format!("기존 첨부 파일: {file_name}")
}

/// Label for a file freshly picked for upload.
pub fn selected_attachment_label(file_name: &str) -> String {
    format!("첨부 파일: {file_name}")
}
