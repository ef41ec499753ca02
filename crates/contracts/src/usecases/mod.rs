pub mod u501_deal_submission;
