pub mod a001_deal_submission;
