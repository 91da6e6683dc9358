pub mod a001_doc_chat;
