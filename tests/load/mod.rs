mod concurrent_requests;
